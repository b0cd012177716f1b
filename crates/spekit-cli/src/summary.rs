use console::Style;
use spekit_core::extract::BatchSummary;
use spekit_core::quality::SnrReport;

struct Styles {
    header: Style,
    label: Style,
    value: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warning: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_batch_summary(summary: &BatchSummary) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Extraction"));
    for rec in &summary.recordings {
        println!(
            "    {}  {} {}",
            s.path.apply_to(rec.output_dir.display()),
            s.value.apply_to(rec.frames_written),
            s.label.apply_to("frames"),
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Recordings"),
        s.value.apply_to(summary.recordings.len())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(summary.total_frames())
    );

    if !summary.failures.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Failed"),
            s.warning.apply_to(summary.failures.len())
        );
        for failure in &summary.failures {
            println!(
                "      {}: {}",
                s.path.apply_to(failure.source.display()),
                s.warning.apply_to(&failure.error)
            );
        }
    }
    println!();
}

pub fn print_snr_report(report: &SnrReport) {
    let s = Styles::new();

    for name in &report.skipped {
        println!(
            "{}",
            s.warning
                .apply_to(format!("Warning: {name} could not be loaded properly."))
        );
    }
    for record in &report.records {
        println!("File: {}, SNR: {:.2}", record.filename, record.snr);
    }

    println!();
    println!("Average Signal-to-Noise Ratio (SNR): {:.2}", report.average);
    println!("Minimum Signal-to-Noise Ratio (SNR): {:.2}", report.minimum());
    println!("Maximum Signal-to-Noise Ratio (SNR): {:.2}", report.maximum());
}
