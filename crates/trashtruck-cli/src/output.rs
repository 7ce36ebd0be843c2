//! Output formatting module

use trashtruck_domain::service::RunReport;
use trashtruck_domain::Truck;
use trashtruck_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &RunReport) -> Result<()> {
    print!("{}", render_report(output_format, report)?);
    Ok(())
}

fn render_report(output_format: OutputFormat, report: &RunReport) -> Result<String> {
    if output_format == OutputFormat::Json {
        let mut content = serde_json::to_string_pretty(report)?;
        content.push('\n');
        return Ok(content);
    }

    let mut out = String::new();
    for line in report.status_lines() {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("\nTruck State\n");
    out.push_str("===========\n");
    out.push_str(&format_truck(&report.truck));

    let failed = report.failed_count();
    if failed > 0 {
        out.push_str(&format!(
            "\n{} of {} operation(s) refused\n",
            failed,
            report.steps.len()
        ));
    }

    Ok(out)
}

fn format_truck(truck: &Truck) -> String {
    let mut out = String::new();
    out.push_str(&format!("Type:            {}\n", truck.truck_type()));
    out.push_str(&format!("License plate:   {}\n", truck.license_plate()));
    out.push_str(&format!("Driver:          {}\n", truck.driver()));
    out.push_str(&format!("Fuel:            {:.1} gal\n", truck.fuel()));
    out.push_str(&format!(
        "Load:            {:.1} / {:.1}\n",
        truck.current_load(),
        truck.capacity()
    ));
    out.push_str(&format!("Smell factor:    {}\n", truck.odor()));
    out
}
