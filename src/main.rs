use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use pose_wireframe::{
    pose::{Assembler, Pose},
    prediction::{ActionPrediction, PredictionAggregator},
    relay::{records_for_poses, RelayConfig, RelaySink},
    replay::FrameReader,
    summary::{Summary, DEFAULT_FRAME_RATE},
    transform::AffineTransform,
    wireframe::{render_poses, DrawInstruction, Style},
};
use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::channel,
        Arc,
    },
};
use structopt::StructOpt;
use tracing::{debug, info, trace, warn};
use tracing_subscriber::layer::SubscriberExt;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Replay of detector output, one JSON frame per line.
    replay: PathBuf,

    #[structopt(flatten)]
    assembler: Assembler,

    #[structopt(flatten)]
    style: Style,

    /// The width of the canvas poses are drawn onto.
    #[structopt(short, long, default_value = "640")]
    width: u32,

    /// The height of the canvas poses are drawn onto.
    #[structopt(short = "-H", long, default_value = "480")]
    height: u32,

    /// Video frame rate, used to turn frame counts into durations.
    #[structopt(short, long, default_value = DEFAULT_FRAME_RATE)]
    frame_rate: f64,

    #[structopt(flatten)]
    relay: RelayConfig,

    #[structopt(short, long, default_value = "info", env = "RUST_LOG")]
    log_level: tracing_subscriber::filter::EnvFilter,

    #[structopt(short, long)]
    show_progress: bool,
}

/// Poses of one frame, with the prediction to display alongside them.
struct Assembled {
    frame_num: usize,
    poses: Vec<Pose>,
    prediction: Option<ActionPrediction>,
}

#[cfg(feature = "gui")]
fn show_poses(
    poses: &[Pose],
    style: &Style,
    transform: &AffineTransform,
    width: u32,
    height: u32,
) -> Result<()> {
    use opencv::{core::CV_8UC3, prelude::*};
    use std::convert::TryFrom;

    let mut frame = Mat::zeros(
        i32::try_from(height).context("failed to convert height to i32")?,
        i32::try_from(width).context("failed to convert width to i32")?,
        CV_8UC3,
    )?
    .to_mat()
    .context("failed converting frame MatExpr to Mat")?;
    render_poses(&mut frame, poses, style, transform)?;
    opencv::highgui::imshow("poses", &frame)?;
    opencv::highgui::wait_key(1)?;
    Ok(())
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    let replay = opt.replay;

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(opt.log_level),
    )?;

    let frames = FrameReader::open(&replay)
        .with_context(|| format!("failed opening replay {:?}", replay))?;
    let assembler = opt.assembler;
    let style = opt.style;
    let transform = AffineTransform::for_canvas(opt.width, opt.height);
    let relay = opt.relay.sink();
    #[cfg(feature = "gui")]
    let (width, height) = (opt.width, opt.height);

    if let Some(relay) = relay.as_ref() {
        info!(message = "relaying landmarks", endpoint = relay.endpoint());
    }

    let running = Arc::new(AtomicBool::new(true));
    let running_ctrl_c = running.clone();

    ctrlc::set_handler(move || {
        running_ctrl_c.store(false, Ordering::SeqCst);
    })
    .context("failed setting Ctrl-C handler")?;

    let pb = if opt.show_progress {
        Some(
            ProgressBar::new_spinner().with_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                    .template("{prefix:.bold.dim} {spinner} {wide_msg}"),
            ),
        )
    } else {
        None
    };
    let pb = pb.as_ref();

    let aggregator = PredictionAggregator::new();
    let aggregator = &aggregator;

    let (frames_tx, frames_rx) = channel();
    let (assembled_tx, assembled_rx) = channel();

    crossbeam::thread::scope(|scope| -> Result<()> {
        let running_read = running.clone();
        let reader = scope.spawn(move |_| {
            for (frame_num, frame) in frames.enumerate() {
                if !running_read.load(Ordering::SeqCst) {
                    break;
                }
                frames_tx.send((frame_num, frame.context("failed reading frame")?))?;
            }
            Ok::<_, anyhow::Error>(())
        });

        let assembly = scope.spawn(move |_| {
            while let Ok((frame_num, frame)) = frames_rx.recv() {
                let poses = assembler.assemble_all(&frame.observations);
                if poses.is_empty() {
                    debug!(message = "no pose detected", frame_num);
                }

                if let Some(prediction) = frame.prediction.as_ref() {
                    let frame_count = frame.frame_count.unwrap_or_default();
                    if let Some(total) = aggregator.observe(prediction, frame_count) {
                        trace!(label = prediction.label(), frame_count, total);
                    }
                }

                assembled_tx.send(Assembled {
                    frame_num,
                    poses,
                    prediction: frame.prediction,
                })?;
            }
            Ok::<_, anyhow::Error>(())
        });

        let render = scope.spawn(move |_| {
            let mut instructions: Vec<DrawInstruction> = Vec::new();
            let mut status = String::new();

            while let Ok(Assembled {
                frame_num,
                poses,
                prediction,
            }) = assembled_rx.recv()
            {
                instructions.clear();
                render_poses(&mut instructions, &poses, &style, &transform)
                    .context("failed drawing poses")?;
                trace!(frame_num, poses = poses.len(), instructions = instructions.len());

                #[cfg(feature = "gui")]
                show_poses(&poses, &style, &transform, width, height)
                    .context("failed showing poses")?;

                if let Some(relay) = relay.as_ref() {
                    if let Err(error) = relay.send(&records_for_poses(&poses)) {
                        warn!(message = "failed to relay landmarks", %error, frame_num);
                    }
                }

                if let Some(prediction) = prediction {
                    status = format!(
                        "{} ({})",
                        prediction.label(),
                        prediction.display_confidence()
                    );
                }

                if let Some(pb) = pb {
                    pb.set_message(format!("frame {} => {}", frame_num, status));
                    pb.inc(1);
                }
            }
            Ok::<_, anyhow::Error>(())
        });

        reader
            .join()
            .map_err(|_| anyhow!("frame reader panicked"))?
            .context("frame reader failed")?;
        assembly
            .join()
            .map_err(|_| anyhow!("pose assembly panicked"))?
            .context("pose assembly failed")?;
        render
            .join()
            .map_err(|_| anyhow!("renderer panicked"))?
            .context("renderer failed")
    })
    .map_err(|_| anyhow!("pipeline panicked"))??;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let summary = Summary::new(&aggregator.snapshot(), opt.frame_rate);
    for row in summary.rows() {
        info!(
            message = "action total",
            label = row.label.as_str(),
            frames = row.frames,
            seconds = row.seconds
        );
    }
    print!("{}", summary);

    Ok(())
}
