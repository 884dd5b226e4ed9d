//! Job execution
//!
//! A job is load -> render -> save, strictly in that order. A batch runs
//! its jobs on a Rayon pool; each job yields its own result, so one failure
//! never stops its siblings and the batch always returns one report per job.

use std::path::Path;

use ab_glyph::FontArc;
use rayon::prelude::*;
use tracing::{info, warn};

use super::job::Job;
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::data::load_records;
use crate::error::ChartError;
use crate::render::{Canvas, RasterCanvas, render_chart};
use crate::settings::ChartConfig;

/// Outcome of one job in a batch
#[derive(Debug)]
pub struct JobReport {
    pub job: Job,
    pub result: Result<(), ChartError>,
}

impl JobReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run one job with an already resolved font.
///
/// The output file is only written once rendering succeeded, so a job that
/// fails to read, parse or validate leaves nothing behind.
pub fn run_job(job: &Job, font: Option<&FontArc>) -> Result<(), ChartError> {
    let dataset = load_records(&job.input)?;

    let mut canvas = RasterCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, font.cloned());
    render_chart(&mut canvas, &job.title, &dataset)?;
    canvas.save(&job.output)?;

    info!(
        "Saved {} ({} records, dimension {})",
        job.output.display(),
        dataset.records().len(),
        dataset.dimension()
    );
    Ok(())
}

/// Single-chart entry point: load, render and save, blocking until done
pub fn create_graph(
    title: &str,
    input: &Path,
    output: &Path,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    let font = config.load_font()?;
    run_job(&Job::new(title, input, output), font.as_ref())
}

/// Run every job concurrently and wait for all of them.
///
/// `threads == 0` lets Rayon pick the pool size. Reports come back in job
/// order.
pub fn run_batch(jobs: &[Job], font: Option<FontArc>, threads: usize) -> Vec<JobReport> {
    let run_all = || {
        jobs.par_iter()
            .map(|job| {
                let result = run_job(job, font.as_ref());
                if let Err(e) = &result {
                    warn!("{} failed ({}): {}", job.title, e.kind(), e);
                }
                JobReport {
                    job: job.clone(),
                    result,
                }
            })
            .collect::<Vec<_>>()
    };

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(run_all),
        Err(e) => {
            warn!("Could not build a {threads}-thread pool ({e}), using the global pool");
            run_all()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::Rgba;
    use std::fs;

    fn write_input(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_end_to_end_image() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "boxes.csv", "0,0,5,0,0\n1,1,0,5,0\n");
        let output = dir.path().join("boxes.png");

        run_job(&Job::new("Boxes", &input, &output), None).unwrap();

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (1124, 1024));
        // Cell centers: (0,0) spans device x 64..512, y 512..960
        assert_eq!(*img.get_pixel(288, 736), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(736, 288), Rgba([0, 255, 0, 255]));
        // Empty cells stay white
        assert_eq!(*img.get_pixel(288, 288), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(736, 736), Rgba([255, 255, 255, 255]));
        // Left axis
        assert_eq!(*img.get_pixel(64, 400), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_grid_lines_are_faint() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "g.csv", "3,3,1,0,0\n");
        let output = dir.path().join("g.png");

        run_job(&Job::new("Grid", &input, &output), None).unwrap();

        let img = image::open(&output).unwrap().to_rgba8();
        // dimension 4: vertical line at logical x 0.25 -> device x 288
        let p = img.get_pixel(288, 700);
        assert!((185..=197).contains(&p[0]), "expected faint grid, got {p:?}");
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "r.csv", "0,0,1,2,3\n4,2,5,0,1\n2,4,0,0,9\n");
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");

        run_job(&Job::new("Reversi", &input, &first), None).unwrap();
        run_job(&Job::new("Reversi", &input, &second), None).unwrap();

        let a = image::open(&first).unwrap().to_rgba8();
        let b = image::open(&second).unwrap().to_rgba8();
        assert_eq!(a.dimensions(), b.dimensions());
        assert!(a.as_raw() == b.as_raw(), "pixel content differs");
    }

    #[test]
    fn test_overplot_is_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "o.csv", "0,0,1,0,0\n0,0,0,0,1\n");
        let output = dir.path().join("o.png");

        run_job(&Job::new("Overplot", &input, &output), None).unwrap();

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(*img.get_pixel(512, 512), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_existing_output_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "a.csv", "0,0,1,0,0\n");
        let output = dir.path().join("a.png");
        fs::write(&output, b"stale").unwrap();

        run_job(&Job::new("A", &input, &output), None).unwrap();
        assert!(image::open(&output).is_ok());
    }

    #[test]
    fn test_rejected_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in [
            ("nonnumeric.csv", "0,0,x,0,0\n"),
            ("zero.csv", "0,0,1,0,0\n1,0,0,0,0\n"),
            ("empty.csv", ""),
            ("deep.csv", "1073741824,0,1,0,0\n"),
            ("deepest.csv", "4294967295,0,1,0,0\n"),
        ] {
            let input = write_input(dir.path(), name, content);
            let output = dir.path().join(format!("{name}.png"));
            let err = run_job(&Job::new(name, &input, &output), None).unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::Parse | ErrorKind::Validate),
                "{name}: {err}"
            );
            assert!(!output.exists(), "{name} produced output");
        }
    }

    #[test]
    fn test_batch_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_input(dir.path(), "good.csv", "0,0,1,0,0\n");
        let jobs = vec![
            Job::new("Good", &good, dir.path().join("good.png")),
            Job::new("Missing", dir.path().join("nope.csv"), dir.path().join("nope.png")),
            Job::new("Unwritable", &good, dir.path().join("no_dir").join("x.png")),
            Job::new("Good again", &good, dir.path().join("good2.png")),
        ];

        let reports = run_batch(&jobs, None, 2);

        assert_eq!(reports.len(), 4);
        let titles: Vec<_> = reports.iter().map(|r| r.job.title.as_str()).collect();
        assert_eq!(titles, vec!["Good", "Missing", "Unwritable", "Good again"]);
        assert!(reports[0].is_ok());
        assert_eq!(
            reports[1].result.as_ref().unwrap_err().kind(),
            ErrorKind::Read
        );
        assert_eq!(
            reports[2].result.as_ref().unwrap_err().kind(),
            ErrorKind::Write
        );
        assert!(reports[3].is_ok());
        assert!(dir.path().join("good.png").exists());
        assert!(dir.path().join("good2.png").exists());
    }

    #[test]
    fn test_create_graph_with_bad_font_fails_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "a.csv", "0,0,1,0,0\n");
        let output = dir.path().join("a.png");
        let config = ChartConfig {
            font_path: Some(dir.path().join("missing.ttf")),
        };
        let err = create_graph("A", &input, &output, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(!output.exists());
    }
}
