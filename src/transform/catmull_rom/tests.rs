use super::*;
use approx::assert_relative_eq;

fn line_stroke(xs: &[f32]) -> Stroke {
    Stroke::open(
        xs.iter()
            .enumerate()
            .map(|(i, &x)| Point::new(Vec2::new(x, 0.0), i as f64 * 16.0, 0.5))
            .collect(),
    )
}

fn fit(stroke: Stroke) -> Stroke {
    CatmullRomTransformer
        .transform(&Drawing::single(stroke))
        .strokes()[0]
        .clone()
}

fn spacings(stroke: &Stroke) -> Vec<f32> {
    stroke
        .points()
        .windows(2)
        .map(|w| w[0].distance(&w[1]))
        .collect()
}

// ── Degenerierte Eingaben ──

#[test]
fn test_einzelpunkt_bleibt_unveraendert() {
    let stroke = line_stroke(&[5.0]);
    assert_eq!(fit(stroke.clone()), stroke);
}

#[test]
fn test_weniger_als_vier_punkte_liefern_ersten_punkt() {
    let stroke = line_stroke(&[0.0, 10.0, 20.0]);
    let result = fit(stroke.clone());
    assert_eq!(result.len(), 3);
    for point in result.points() {
        assert_eq!(*point, stroke.points()[0]);
    }
}

#[test]
fn test_spline_point_hinter_dem_letzten_segment() {
    let stroke = line_stroke(&[0.0, 10.0, 20.0, 30.0, 40.0]);
    // ⌊3.5⌋ + 3 = 6 > 5 → vorletzter Punkt
    let p = spline_point(stroke.points(), 3.5);
    assert_eq!(p, stroke.points()[3]);
}

// ── Spline-Auswertung ──

#[test]
fn test_spline_point_uebernimmt_zeit_des_segmentanfangs() {
    let stroke = line_stroke(&[0.0, 10.0, 20.0, 30.0, 40.0]);
    let p = spline_point(stroke.points(), 1.5);
    // Segment 1 läuft von P2 nach P3
    assert_relative_eq!(p.location.x, 25.0, epsilon = 1e-4);
    assert_eq!(p.time, stroke.points()[1].time);
}

#[test]
fn test_arc_length_table_begrenzt_parameter() {
    let stroke = line_stroke(&[0.0, 10.0, 20.0, 30.0, 40.0]);
    let table = ArcLengthTable::build(stroke.points(), 0.2);
    assert_eq!(table.parameter_at(-0.5), 0.0);
    assert_eq!(table.parameter_at(1.5), 1.0);
    assert_eq!(table.parameter_at(0.0), 0.0);
    assert!(table.max_length() > 0.0);
}

// ── Neuabtastung ──

#[test]
fn test_punktanzahl_bleibt_erhalten() {
    let stroke = line_stroke(&[0.0, 3.0, 11.0, 12.0, 30.0, 31.0, 45.0, 60.0, 61.0]);
    assert_eq!(fit(stroke).len(), 9);
}

#[test]
fn test_gleichmaessige_eingabe_bleibt_gleichmaessig() {
    let xs: Vec<f32> = (0..=10).map(|i| i as f32 * 10.0).collect();
    let result = fit(line_stroke(&xs));
    assert_eq!(result.len(), 11);

    // Spline läuft von P1 (10) Richtung P9 (90): x_j = 10 + 80·j/11
    for (j, point) in result.points().iter().enumerate() {
        let expected = 10.0 + 80.0 * j as f32 / 11.0;
        assert_relative_eq!(point.location.x, expected, epsilon = 1e-2);
        assert_relative_eq!(point.location.y, 0.0, epsilon = 1e-5);
    }
}

#[test]
fn test_ungleichmaessige_eingabe_wird_nach_bogenlaenge_verteilt() {
    // Abstände wechseln zwischen 8 und 12 (Verhältnis 1.5)
    let result = fit(line_stroke(&[
        0.0, 8.0, 20.0, 28.0, 40.0, 48.0, 60.0, 68.0, 80.0,
    ]));
    let gaps = spacings(&result);
    let mean = gaps.iter().sum::<f32>() / gaps.len() as f32;
    assert!(mean > 0.0);
    for (i, gap) in gaps.iter().enumerate() {
        assert!(
            (gap - mean).abs() < mean * 0.2,
            "Abstand {} = {:.3} weicht zu stark vom Mittel {:.3} ab",
            i,
            gap,
            mean
        );
    }

    // Monoton entlang der Geraden
    let xs: Vec<f32> = result.points().iter().map(|p| p.location.x).collect();
    assert!(xs.windows(2).all(|w| w[1] > w[0]), "x nicht monoton: {:?}", xs);
}

#[test]
fn test_geschlossen_flag_bleibt_erhalten() {
    let stroke = line_stroke(&[0.0, 10.0, 20.0, 30.0, 40.0]).with_closed(true);
    assert!(fit(stroke).is_closed());
}

#[test]
fn test_mehrere_striche_werden_unabhaengig_gefittet() {
    let a = line_stroke(&[0.0, 10.0, 20.0, 30.0, 40.0]);
    let b = line_stroke(&[7.0]);
    let result = CatmullRomTransformer.transform(&Drawing::new(vec![a.clone(), b.clone()]));
    assert_eq!(result.strokes().len(), 2);
    assert_eq!(result.strokes()[0], fit(a));
    assert_eq!(result.strokes()[1], b);
}
