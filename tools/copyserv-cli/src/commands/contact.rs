//! Contact commands: validate a request, or compose its chat message and link.

use anyhow::{bail, Result};
use chrono::Local;
use dialoguer::Input;

use copyserv_shop::contact::{validate, validate_field, FormField, Submission, ValidationReport};
use copyserv_shop::ShopError;
use landing_site::{render_notification, Notification, NotificationKind};

use super::{ContactArgs, ContactCommand, ContactFields};
use crate::context::Context;

const VALID_MESSAGE: &str = "Solicitud válida";

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ContactCommand::Validate { fields, html } => validate_request(&fields, html, ctx),
        ContactCommand::Send {
            fields,
            interactive,
        } => {
            let fields = if interactive {
                prompt_fields(&fields)?
            } else {
                fields
            };
            send(&fields, ctx).await
        }
    }
}

fn validate_request(fields: &ContactFields, html: bool, ctx: &Context) -> Result<()> {
    let report = validate(&fields.to_request());

    if html {
        println!("{}", render_notification(&validation_notice(&report)));
    } else if ctx.output.is_json() {
        ctx.output.json(&report);
    } else if report.is_valid() {
        ctx.output.success(VALID_MESSAGE);
    } else {
        for error in &report.errors {
            ctx.output.list_item(error);
        }
    }

    if !report.is_valid() {
        bail!("{} error(es) de validación", report.errors.len());
    }
    Ok(())
}

/// The notice the page would show for `report`.
fn validation_notice(report: &ValidationReport) -> Notification {
    Notification::from_report(report)
        .unwrap_or_else(|| Notification::new(NotificationKind::Success, VALID_MESSAGE))
}

async fn send(fields: &ContactFields, ctx: &Context) -> Result<()> {
    let request = fields.to_request();
    let number = &ctx.config.business.whatsapp_number;

    let submission = match Submission::prepare(&request, number, Local::now().naive_local()) {
        Ok(submission) => submission,
        Err(ShopError::InvalidContact(errors)) => {
            for error in &errors {
                ctx.output.list_item(error);
            }
            bail!("{} error(es) de validación", errors.len());
        }
        Err(e) => return Err(e.into()),
    };

    let delay = ctx.config.submit_delay();
    let spinner = ctx.output.spinner("Enviando...");
    tokio::time::sleep(delay).await;
    spinner.finish_and_clear();

    ctx.logger
        .info_builder("contact request composed")
        .field_u64("message_chars", submission.message.chars().count() as u64)
        .duration_ms("delay_ms", delay)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&submission);
        return Ok(());
    }

    ctx.output.header("Mensaje");
    ctx.output.raw(&submission.message);
    ctx.output.header("Enlace");
    ctx.output.raw(&submission.link);
    ctx.output.success(landing_site::SENT_MESSAGE);
    Ok(())
}

/// Ask for each field in form order, validating as the form does on blur.
fn prompt_fields(defaults: &ContactFields) -> Result<ContactFields> {
    let mut fields = defaults.clone();

    for field in FormField::ALL {
        let initial = match field {
            FormField::Name => fields.name.clone(),
            FormField::Phone => fields.phone.clone(),
            FormField::Email => fields.email.clone().unwrap_or_default(),
            FormField::Location => fields.location.clone().unwrap_or_default(),
            FormField::Message => fields.message.clone(),
        };

        let mut input = Input::<String>::new()
            .with_prompt(field.label())
            .allow_empty(!field.is_required())
            .validate_with(move |value: &String| -> Result<(), &'static str> {
                match validate_field(field, value) {
                    Some(error) => Err(error),
                    None => Ok(()),
                }
            });
        if !initial.is_empty() {
            input = input.with_initial_text(initial);
        }
        let value = input.interact_text()?;

        match field {
            FormField::Name => fields.name = value,
            FormField::Phone => fields.phone = value,
            FormField::Email => fields.email = Some(value),
            FormField::Location => fields.location = Some(value),
            FormField::Message => fields.message = value,
        }
    }

    Ok(fields)
}
