use crate::config::CliConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use signup_form::HttpGateway;

pub async fn execute(config: CliConfig, company: Option<&str>) -> Result<()> {
    let gateway = HttpGateway::from_config(&config.form)?;

    let partners = gateway
        .list(company)
        .await
        .with_context(|| format!("Failed to fetch partners from {}", gateway.endpoint()))?;

    if partners.is_empty() {
        println!("{}", "No partners registered yet".yellow());
        return Ok(());
    }

    for partner in &partners {
        let s = &partner.submission;
        println!("{}", s.company.bold());
        println!("  {} · {} · {}", s.name, s.email_address, s.mobile_phone);
        println!(
            "  {}  registered {}",
            s.postcode,
            partner.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    println!();
    println!("{} partner(s)", partners.len());

    Ok(())
}
