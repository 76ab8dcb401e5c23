use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lggc::large_gap::config::{DEFAULT_PARAMETER_SETS, MAX_SUPPORTED_WIDTH};
use lggc::large_gap::render::{self, STATISTICS_HEADER};
use lggc::large_gap::{
    compute_gaps, statistics_at, CodeBuilder, Layout, LggcConfig, ShapeParameters,
    StatisticsSweep,
};
use log::{info, warn};

/// Statistics and printouts of large-gap Gray codes.
#[derive(Parser, Debug)]
#[command(name = "lggc", version)]
struct Cli {
    /// First width of the statistics table
    #[arg(long, default_value_t = lggc::large_gap::DEFAULT_MIN_WIDTH)]
    min_width: usize,

    /// Last width of the statistics table
    #[arg(long, default_value_t = lggc::large_gap::DEFAULT_MAX_WIDTH)]
    max_width: usize,

    /// Widest code to build
    #[arg(long, default_value_t = MAX_SUPPORTED_WIDTH)]
    max_supported_width: usize,

    /// Shape parameters "p,q,r,s" to build and measure, repeatable
    #[arg(long = "params")]
    params: Vec<ShapeParameters>,

    /// Canonical width measured after the parameter sets
    #[arg(long, default_value_t = 13)]
    compare_width: usize,

    /// Width of the code printed in full
    #[arg(long, default_value_t = 7)]
    show_width: usize,

    /// Print the shown code one word per line
    #[arg(long)]
    vertical: bool,

    /// Directory receiving the 16-bit and 13-bit code files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Compute the statistics table on all cores (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn config(&self) -> LggcConfig {
        let params = if self.params.is_empty() {
            DEFAULT_PARAMETER_SETS.to_vec()
        } else {
            self.params.clone()
        };
        let config = LggcConfig::new()
            .with_width_range(self.min_width, self.max_width)
            .with_max_supported_width(self.max_supported_width)
            .with_parameter_sets(params)
            .with_comparison_width(Some(self.compare_width))
            .with_show_width(self.show_width);
        match &self.output_dir {
            Some(dir) => config.with_output_dir(dir),
            None => config,
        }
    }
}

fn banner(out: &mut impl Write, lines: &[&str]) -> io::Result<()> {
    let rule = "#".repeat(68);
    writeln!(out, "{}", rule)?;
    for line in lines {
        writeln!(out, "#######  {:<52}#######", line)?;
    }
    writeln!(out, "{}", rule)?;
    writeln!(out)
}

fn statistics_table(cli: &Cli, config: &LggcConfig, out: &mut impl Write) -> lggc::Result<()> {
    if cli.parallel {
        #[cfg(feature = "parallel")]
        {
            let rows = lggc::large_gap::par_statistics(config.width_range()?, &config.builder()?)?;
            return render::write_statistics_table(out, rows);
        }
        #[cfg(not(feature = "parallel"))]
        warn!("built without the `parallel` feature, computing sequentially");
    }

    let sweep = StatisticsSweep::new(config.width_range()?, config.builder()?)?;
    let rows = sweep.collect::<lggc::Result<Vec<_>>>()?;
    render::write_statistics_table(out, rows)
}

fn parameter_sets(
    config: &LggcConfig,
    builder: &mut CodeBuilder,
    out: &mut impl Write,
) -> lggc::Result<()> {
    writeln!(out, "{}", STATISTICS_HEADER)?;
    for &params in &config.parameter_sets {
        match builder.build_from_parameters(params) {
            Ok(code) => writeln!(out, "{}  {}", statistics_at(&code, params.width())?, params)?,
            Err(err) => warn!("skipping {}: {}", params, err),
        }
    }
    if let Some(width) = config.comparison_width {
        writeln!(out, "{}", compute_gaps(builder.canonical(width)?)?)?;
    }
    Ok(())
}

fn write_files(config: &LggcConfig, builder: &mut CodeBuilder) -> lggc::Result<()> {
    let Some(dir) = &config.output_dir else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)?;
    for (width, layout) in [
        (16, Layout::Vertical),
        (13, Layout::Vertical),
        (13, Layout::CArray),
    ] {
        if width > builder.max_width() {
            continue;
        }
        let path = dir.join(layout.file_name(width));
        render::write_to_file(&path, builder.canonical(width)?, layout)?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn run(cli: &Cli) -> lggc::Result<()> {
    let config = cli.config();
    config.validate()?;
    let mut builder = config.builder()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    banner(&mut out, &["1)  Statistics for all Large-Gap Gray Codes"])?;
    statistics_table(cli, &config, &mut out)?;
    writeln!(out)?;
    writeln!(out)?;

    banner(&mut out, &["2)  Statistics for parameterized codes"])?;
    parameter_sets(&config, &mut builder, &mut out)?;
    writeln!(out)?;
    writeln!(out)?;

    let shown = builder.canonical(config.show_width)?;
    let stats = compute_gaps(shown)?;
    banner(
        &mut out,
        &[
            &format!("3)  Generated {}-bit binary code", stats.width),
            &format!(
                "    Note: MinGap = {} and MaxGap = {}",
                stats.min_gap, stats.max_gap
            ),
        ],
    )?;
    let layout = if cli.vertical {
        Layout::Vertical
    } else {
        Layout::Horizontal
    };
    render::write_code(&mut out, shown, layout)?;
    out.flush()?;

    write_files(&config, &mut builder)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lggc: {}", err);
            ExitCode::FAILURE
        }
    }
}
