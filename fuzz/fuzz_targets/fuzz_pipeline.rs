#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use markup_ink::{
    BezierTransformer, CatmullRomTransformer, Drawing, DrawingStyle, InkOptions, Point, Stroke,
    ToolSettings, TransformChain, Transforming,
};

/// Je 12 Bytes: x, y, force als little-endian f32; das erste Byte wählt Werkzeug und Schluss.
fn decode(data: &[u8]) -> Option<(u8, Drawing)> {
    let (&selector, rest) = data.split_first()?;
    let points: Vec<Point> = rest
        .chunks_exact(12)
        .take(256)
        .enumerate()
        .map(|(i, chunk)| {
            let f = |k: usize| f32::from_le_bytes([chunk[k], chunk[k + 1], chunk[k + 2], chunk[k + 3]]);
            Point::new(Vec2::new(f(0), f(4)), i as f64, f(8))
        })
        .collect();
    let stroke = Stroke::new(points, selector & 0x80 != 0);
    Some((selector, Drawing::new(vec![stroke.clone(), stroke])))
}

fuzz_target!(|data: &[u8]| {
    let Some((selector, drawing)) = decode(data) else {
        return;
    };
    let options = InkOptions::default();

    let tools = ToolSettings::default_tools();
    let tool = &tools[selector as usize % tools.len()];
    if let Some(style) = DrawingStyle::for_tool(tool, &options) {
        let _ = style.apply(&drawing);
        let _ = style.with_smoothing(CatmullRomTransformer).apply(&drawing);
    }

    let _ = TransformChain::shape_snap(&options)
        .then(BezierTransformer)
        .transform(&drawing);
});
