use crate::config::CliConfig;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use signup_form::{
    ErrorKey, Field, FieldValue, FormController, HttpGateway, Navigator, SubmitResult,
};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Contact name
    #[arg(long)]
    name: String,

    /// Company (dealership) name
    #[arg(long)]
    company: String,

    /// UK mobile number, e.g. "07 123 456 789"
    #[arg(long)]
    mobile: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    postcode: String,

    /// Offer "pay later"
    #[arg(long)]
    pay_later: bool,

    /// Offer "pay now"
    #[arg(long)]
    pay_now: bool,

    /// Sink URL (overrides signup.toml and SIGNUP_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,
}

impl RegisterArgs {
    /// Values in the order a user would fill the form
    fn entries(&self) -> Vec<(Field, FieldValue)> {
        vec![
            (Field::Name, self.name.as_str().into()),
            (Field::Company, self.company.as_str().into()),
            (Field::MobilePhone, self.mobile.as_str().into()),
            (Field::EmailAddress, self.email.as_str().into()),
            (Field::Postcode, self.postcode.as_str().into()),
            (Field::PayLater, self.pay_later.into()),
            (Field::PayNow, self.pay_now.into()),
        ]
    }
}

/// Prints the page change a browser would perform
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, target: &str) {
        println!("{} {}", "→".cyan(), target);
    }
}

pub async fn execute(config: CliConfig, args: RegisterArgs) -> Result<()> {
    let config = config.with_endpoint(args.endpoint.clone());
    let delay = config.form.redirect_delay_secs;

    let gateway = Arc::new(HttpGateway::from_config(&config.form)?);
    let controller = FormController::new(gateway, Arc::new(PrintNavigator), config.form);

    for (field, value) in args.entries() {
        controller
            .on_field_change(field, value.clone())
            .map_err(anyhow::Error::msg)?;
        controller
            .on_field_blur(field, value)
            .map_err(anyhow::Error::msg)?;
    }

    match controller.submit().await {
        SubmitResult::Succeeded { partner, redirect } => {
            println!("{}", "Registration received".green().bold());
            println!("  id:      {}", partner.id);
            println!("  company: {}", partner.submission.company);
            println!();
            println!("Redirecting to {} in {}s...", redirect.target(), delay);
            redirect.wait().await;
            Ok(())
        }
        SubmitResult::Invalid(errors) => {
            print_errors(&errors);
            bail!("Registration has {} invalid field(s)", errors.len());
        }
        SubmitResult::Failed(reason) => {
            let banner = controller.error(ErrorKey::Form).unwrap_or_else(|| reason.clone());
            println!("{} {}", "✗".red(), banner);
            bail!(reason);
        }
        SubmitResult::AlreadySubmitting
        | SubmitResult::AlreadySubmitted
        | SubmitResult::Disposed => {
            bail!("Registration was not sent");
        }
    }
}

fn print_errors(errors: &BTreeMap<ErrorKey, String>) {
    for (key, message) in errors {
        println!("  {} {}: {}", "✗".red(), key, message);
    }
}
