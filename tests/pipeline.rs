use pose_wireframe::{
    observation::{KeypointObservation, RecognizedPoint},
    pose::{build_connections, Assembler, JointName::*},
    prediction::{ActionPrediction, AppLabel, PredictionAggregator},
    replay::FrameReader,
    summary::Summary,
    transform::AffineTransform,
    wireframe::{render_poses, DrawInstruction, Style},
};
use std::{collections::HashMap, io::Cursor};

#[test]
fn arm_observation_builds_two_connections_in_table_order() {
    let observation = KeypointObservation::new(vec![
        (LeftShoulder, RecognizedPoint::new(0.2, 0.2, 0.9)),
        (LeftElbow, RecognizedPoint::new(0.3, 0.4, 0.9)),
        (LeftWrist, RecognizedPoint::new(0.35, 0.6, 0.9)),
    ]);
    let pose = Assembler::default().assemble(&observation).unwrap();
    assert_eq!(pose.landmarks().len(), 3);

    let pairs = [(LeftShoulder, LeftElbow), (LeftElbow, LeftWrist)];
    let connections = build_connections(pose.landmarks(), &pairs);
    assert_eq!(connections.len(), 2);
    assert_eq!(connections[0].joints(), (LeftShoulder, LeftElbow));
    assert_eq!(connections[1].joints(), (LeftElbow, LeftWrist));

    // the built-in table has no shoulder-wrist pair either
    let joints: Vec<_> = pose.connections().iter().map(|c| c.joints()).collect();
    assert_eq!(joints, pairs.to_vec());
}

#[test]
fn aggregator_sums_per_label() {
    let aggregator = PredictionAggregator::new();
    aggregator.record_event("squat", 30);
    aggregator.record_event("squat", 12);
    aggregator.record_event("lunge", 5);

    let expected: HashMap<String, u64> = vec![("squat".to_owned(), 42), ("lunge".to_owned(), 5)]
        .into_iter()
        .collect();
    assert_eq!(aggregator.snapshot(), expected);
}

#[test]
fn replay_drives_poses_wireframes_and_summary() {
    let replay = r#"{"prediction": {"status": "starting"}, "frame_count": 30}
{"observations": [{"joints": [{"name": "left_hip", "x": 0.4, "y": 0.5, "confidence": 0.9}, {"name": "left_knee", "x": 0.42, "y": 0.7, "confidence": 0.9}, {"name": "root", "x": 0.5, "y": 0.5, "confidence": 0.9}]}, {"joints": []}], "prediction": {"label": "squat", "confidence": 0.9}, "frame_count": 60}
{"observations": [{"joints": [{"name": "nose", "x": 0.5, "y": 0.1, "confidence": 0.05}]}], "prediction": {"label": "lunge", "confidence": 0.6}, "frame_count": 15}
"#;

    let assembler = Assembler::default();
    let aggregator = PredictionAggregator::new();
    let mut instructions: Vec<DrawInstruction> = Vec::new();
    let mut pose_counts = Vec::new();

    for frame in FrameReader::new(Cursor::new(replay)) {
        let frame = frame.unwrap();
        let poses = assembler.assemble_all(&frame.observations);
        pose_counts.push(poses.len());
        render_poses(
            &mut instructions,
            &poses,
            &Style::default(),
            &AffineTransform::for_canvas(100, 100),
        )
        .unwrap();
        if let Some(prediction) = frame.prediction.as_ref() {
            aggregator.observe(prediction, frame.frame_count.unwrap_or_default());
        }
    }

    assert_eq!(pose_counts, vec![0, 1, 0]);
    // hip-knee line, then the two markers
    assert_eq!(instructions.len(), 3);
    assert!(matches!(instructions[0], DrawInstruction::Line { .. }));

    let summary = Summary::new(&aggregator.snapshot(), 30.0);
    let rows: Vec<_> = summary
        .rows()
        .iter()
        .map(|row| (row.label.as_str(), row.frames))
        .collect();
    assert_eq!(rows, vec![("squat", 60), ("lunge", 15)]);
    assert!(!ActionPrediction::app(AppLabel::Starting).is_model_label());
}
