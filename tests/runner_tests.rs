// Chart planning over benchmark tables written to a temporary directory
use std::fs;
use std::path::Path;

use benchplot::benchmark::SpeedupReport;
use benchplot::config::PlotConfig;
use benchplot::runner::ChartRunner;
use benchplot::PlotError;
use env_logger::Env;

const SERIAL_CSV: &str = "\
Mode,Width,Height,Length,Iterations,Time[s],Cells/s
Serial,32,32,1024,10,0.004,2560000
Serial,64,32,2048,10,0.01,2048000
Serial Ifs,32,32,1024,10,0.005,2048000
Serial 2D,32,32,1024,10,0.006,1706667
";

const CUDA_CSV: &str = "\
Mode,Width,Height,Length,Threads,Iterations,Time[μs],Cells/s
CUDA,32,32,1024,128,10,600,17066666
CUDA,32,32,1024,256,10,500,20480000
CUDA,64,32,2048,256,10,1000,20480000
CUDA Ifs,32,32,1024,256,10,800,12800000
CUDA 2D,32,32,1024,256,10,250,40960000
";

const OPENCL_CSV: &str = "\
Mode,Width,Height,Length,Threads,Iterations,Time[μs],Cells/s
OpenCL,32,32,1024,128,10,400,25600000
OpenCL,64,32,2048,128,10,2000,10240000
OpenCL 2D,32,32,1024,64,10,300,34133333
";

fn write_tables(dir: &Path, opencl: bool) {
    fs::write(dir.join("serial_benchmark.csv"), SERIAL_CSV).unwrap();
    fs::write(dir.join("cuda_benchmark.csv"), CUDA_CSV).unwrap();
    if opencl {
        fs::write(dir.join("opencl_benchmark.csv"), OPENCL_CSV).unwrap();
    }
}

fn config_for(dir: &Path) -> PlotConfig {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();

    PlotConfig {
        data_dir: dir.display().to_string(),
        output_dir: dir.join("img").display().to_string(),
        ..PlotConfig::default()
    }
}

#[test]
fn test_plan_produces_every_chart() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path(), true);

    let runner = ChartRunner::new(config_for(dir.path()));
    let plan = runner.plan().unwrap();

    let names: Vec<&str> = plan.charts.iter().map(|c| c.spec.file_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "serial_times.png",
            "cuda_times.png",
            "cuda_ifs_times.png",
            "cuda_2d_times.png",
            "cuda_time_comparison.png",
            "opencl_times.png",
            "opencl_2d_times.png",
            "opencl_time_comparison.png",
            "speedup.png",
        ]
    );

    let speedup_chart = plan.charts.last().unwrap();
    assert_eq!(speedup_chart.size, (1200, 700));
    assert_eq!(
        speedup_chart.spec.series_labels(),
        vec!["CUDA", "CUDA Ifs", "CUDA 2D", "OpenCL"]
    );

    // OpenCL 2D only ran with 64 threads, so it has no speedup at the configured 128
    let opencl: Vec<_> = plan.report.backend_records("OpenCL").collect();
    assert_eq!(opencl.len(), 2);
    assert!((opencl[0].speedup - 10.0).abs() < 1e-9);
    assert!((opencl[1].speedup - 5.0).abs() < 1e-9);

    // Serial Ifs/2D rows never count as baseline
    let cuda_2d: Vec<_> = plan
        .report
        .records
        .iter()
        .filter(|r| r.mode == "CUDA 2D")
        .collect();
    assert_eq!(cuda_2d.len(), 1);
    assert!((cuda_2d[0].speedup - 16.0).abs() < 1e-9);
}

#[test]
fn test_missing_backend_table_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path(), false);

    let runner = ChartRunner::new(config_for(dir.path()));
    match runner.plan().unwrap_err() {
        PlotError::MissingInput { path } => {
            assert!(path.ends_with("opencl_benchmark.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_column_names_table_and_column() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path(), true);
    fs::write(
        dir.path().join("cuda_benchmark.csv"),
        "Mode,Length,Time[μs]\nCUDA,1024,500\n",
    )
    .unwrap();

    let runner = ChartRunner::new(config_for(dir.path()));
    let err = runner.plan().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("cuda_benchmark.csv"));
    assert!(message.contains("'Threads'"));
}

#[test]
fn test_run_all_writes_charts_and_report() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path(), true);

    let config = config_for(dir.path());
    let report_path = config.output_path(&config.report_file);
    let mut runner = ChartRunner::new(config);
    let report = runner.run_all().unwrap();

    let written = runner.written_files();
    // 9 charts plus the report
    assert_eq!(written.len(), 10);
    assert!(dir.path().join("img").is_dir());
    for path in written {
        assert!(path.exists(), "{} was not written", path.display());
        assert!(fs::metadata(path).unwrap().len() > 0);
    }
    assert!(written.iter().any(|p| p.ends_with("speedup.png")));
    assert_eq!(written.last().unwrap(), &report_path);

    let loaded = SpeedupReport::load_from_file(&report_path).unwrap();
    assert_eq!(loaded.records, report.records);
    assert_eq!(loaded.baseline_mode, "Serial");
    assert_eq!(loaded.generated_at, report.generated_at);
}
