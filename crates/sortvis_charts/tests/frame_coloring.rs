use sortvis_charts::prelude::*;
use sortvis_core::{Algorithm, Frame, Trace};

fn models(algorithm: Algorithm, input: Vec<i64>) -> Vec<BarChartModel> {
    let style = BarChartStyle::default();
    Trace::new(input, algorithm)
        .steps()
        .iter()
        .map(|step| BarChartModel::new(&Frame::from(step), &style).unwrap())
        .collect()
}

#[test]
fn quick_sort_frames_mark_pivot_or_sorted() {
    let trace = Trace::new(vec![7, 2, 9, 4, 4, 1, 8], Algorithm::Quick);
    let style = BarChartStyle::default();

    for step in trace.steps() {
        let frame = Frame::from(step);
        let model = BarChartModel::new(&frame, &style).unwrap();
        let Some(meta) = step.quick else { continue };
        let role = model.bars[meta.pivot].role;
        assert!(
            role == ColorRole::Pivot || role == ColorRole::Sorted,
            "pivot bar had role {role:?}"
        );
    }
}

#[test]
fn terminal_frame_is_all_green() {
    for algorithm in Algorithm::ALL {
        let last = models(algorithm, vec![3, 1, 2, 5, 4]).pop().unwrap();
        assert!(last.bars.iter().all(|bar| bar.color == Color::GREEN));
    }
}

#[test]
fn bubble_frames_never_use_partition_roles() {
    for model in models(Algorithm::Bubble, vec![5, 3, 1, 4]) {
        for bar in &model.bars {
            assert!(!matches!(
                bar.role,
                ColorRole::Pivot
                    | ColorRole::Scan
                    | ColorRole::Probe
                    | ColorRole::InRange
                    | ColorRole::OutOfRange
            ));
        }
    }
}

#[test]
fn flat_shading_never_dims() {
    let style = BarChartStyle {
        shading: PartitionShading::Flat,
        ..BarChartStyle::default()
    };
    let trace = Trace::new(vec![6, 5, 4, 3, 2, 1], Algorithm::Quick);
    for step in trace.steps() {
        let model = BarChartModel::new(&Frame::from(step), &style).unwrap();
        assert!(model.bars.iter().all(|bar| bar.color.a == 1.0));
    }
}

#[test]
fn rejects_negative_values() {
    assert!(BarChartModel::new(&Frame::idle(vec![-5, 2]), &BarChartStyle::default()).is_err());
}
