//! `bookquote quote`: price a conversion from local catalog and book files.

use std::process::ExitCode;

use serde::Serialize;

use crate::catalog::ProductCatalog;
use crate::cli::{output, read_input, QuoteArgs};
use crate::config::Config;
use crate::desk::{Assessment, QuoteDesk, QuoteRequest};
use crate::domain::{ProductId, Quote, ValidationResult};
use crate::error::Result;
use crate::wire::{parse_book, parse_products};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteReport<'a> {
    product: &'a ProductId,
    quote: &'a Quote,
    validation: &'a ValidationResult,
}

pub fn run(args: &QuoteArgs, config: &Config) -> Result<ExitCode> {
    let products = parse_products(&read_input(&args.products)?)?;
    let book = parse_book(&read_input(&args.book)?)?;
    let desk = QuoteDesk::new(ProductCatalog::new(products), config.quote);

    let mut request = QuoteRequest::parse(
        args.from.clone(),
        args.to.clone(),
        args.action,
        &args.amount,
    )?;
    if let Some(places) = args.places {
        request = request.with_places(places);
    }

    let assessment = desk.assess(&request, &book)?;
    if args.json {
        print_json(&assessment)?;
    } else {
        print_text(&request, &assessment);
    }

    Ok(if assessment.validation.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_json(assessment: &Assessment) -> Result<()> {
    let report = QuoteReport {
        product: &assessment.plan.product,
        quote: &assessment.quote,
        validation: &assessment.validation,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_text(request: &QuoteRequest, assessment: &Assessment) {
    let Assessment {
        plan,
        quote,
        validation,
    } = assessment;

    output::section(&format!("{} {}", plan.product, request.action));
    output::key_value("Amount", format!("{} {}", request.amount, request.from));
    output::key_value("Book", plan.side(request.action));
    if quote.fillable {
        output::key_value(
            "Price",
            format!("{} {}/{}", quote.quote_price, request.to, request.from),
        );
        output::key_value("Total", format!("{} {}", quote.total, request.to));
    }

    if validation.is_valid {
        output::ok("Order valid");
    } else {
        output::error(&validation.message);
    }
}
