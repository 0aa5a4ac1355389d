//! AWS Lambda handler for pricing quotations
//!
//! This Lambda function accepts quotation details via JSON and returns the
//! priced premium breakdown as JSON or as the rendered PDF document.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use quotation_system::config;
use quotation_system::quote::{
    quote, EducationLevel, Gender, PresenterInfo, Quotation, QuotationInput, SmokerStatus,
};
use quotation_system::rates::{load_rate_table, RateTable};
use quotation_system::render::{kshs, render_quotation, QUOTATION_FILENAME, QUOTATION_MIME};
use quotation_system::QuoteError;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response format for a priced quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Pdf,
}

/// Input for a premium quotation
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Client full name printed on the quotation (default: blank)
    #[serde(default)]
    pub client_name: String,

    /// Age last birthday (default: 30)
    #[serde(default = "default_age")]
    pub age: u8,

    /// Gender of the client (default: "Male")
    #[serde(default = "default_gender")]
    pub gender: Gender,

    /// Smoker status of the client (default: "Smoker")
    #[serde(default = "default_smoker_status")]
    pub smoker_status: SmokerStatus,

    /// Highest education level of the client (default: "Tertiary")
    #[serde(default = "default_education")]
    pub education: EducationLevel,

    /// Sum assured in whole KShs (default: 1,000,000)
    #[serde(default = "default_sum_assured")]
    pub sum_assured: u64,

    /// Presenter full name
    #[serde(default)]
    pub presenter_name: Option<String>,

    /// Distribution channel the quotation goes out through
    #[serde(default)]
    pub distribution_channel: Option<String>,

    /// Presenter's agent code
    #[serde(default)]
    pub presenter_code: Option<String>,

    /// Response format: "json" or "pdf" (default: "json")
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_age() -> u8 { 30 }
fn default_gender() -> Gender { Gender::Male }
fn default_smoker_status() -> SmokerStatus { SmokerStatus::Smoker }
fn default_education() -> EducationLevel { EducationLevel::Tertiary }
fn default_sum_assured() -> u64 { 1_000_000 }

/// Output for a priced quotation
#[derive(Debug, Serialize)]
pub struct QuoteResponse<'a> {
    pub quotation: &'a Quotation,
    pub formatted: FormattedAmounts,
}

/// Display-ready KShs amounts, rounded to cents
#[derive(Debug, Serialize)]
pub struct FormattedAmounts {
    pub sum_assured: String,
    pub base_premium: String,
    pub phcf_levy: String,
    pub stamp_duty: String,
    pub total_monthly_premium: String,
}

fn status_for(err: &QuoteError) -> u16 {
    match err {
        QuoteError::InvalidInput(_) | QuoteError::NoMatchingRate { .. } => 422,
        _ => 500,
    }
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(
            serde_json::json!({ "error": message }).to_string(),
        ))
        .unwrap()
}

fn json_response<T: Serialize>(body: &T) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn pdf_response(bytes: Vec<u8>) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", QUOTATION_MIME)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", QUOTATION_FILENAME),
        )
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Binary(bytes))
        .unwrap()
}

/// Lambda handler function
async fn handler(table: Arc<RateTable>, event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: QuoteRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let input = QuotationInput {
        client_name: request.client_name.clone(),
        age: request.age,
        gender: request.gender,
        smoker_status: request.smoker_status,
        education: request.education,
        sum_assured: request.sum_assured,
    };
    let presenter = PresenterInfo {
        presenter_name: request.presenter_name.clone(),
        distribution_channel: request.distribution_channel.clone(),
        presenter_code: request.presenter_code.clone(),
    }
    .normalized();

    let quotation = match quote(&table, input, presenter) {
        Ok(q) => q,
        Err(e) => {
            return Ok(error_response(status_for(&e), &e.to_string()));
        }
    };

    match request.output {
        OutputFormat::Json => {
            let response = QuoteResponse {
                quotation: &quotation,
                formatted: FormattedAmounts {
                    sum_assured: kshs(Decimal::from(quotation.input.sum_assured)),
                    base_premium: kshs(quotation.breakdown.base),
                    phcf_levy: kshs(quotation.breakdown.phcf),
                    stamp_duty: kshs(quotation.breakdown.stamp_duty),
                    total_monthly_premium: kshs(quotation.breakdown.total),
                },
            };
            Ok(json_response(&response))
        }
        OutputFormat::Pdf => {
            let branding = config::branding_path();
            match render_quotation(&quotation, Some(&branding)) {
                Ok(bytes) => Ok(pdf_response(bytes)),
                Err(e) => Ok(error_response(status_for(&e), &e.to_string())),
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // Fatal table problems abort cold start rather than failing every request
    let rates_path = config::rate_table_path();
    let table = Arc::new(load_rate_table(&rates_path)?);
    info!("serving quotations with {} rate rows", table.len());

    run(service_fn(move |event| {
        let table = Arc::clone(&table);
        async move { handler(table, event).await }
    }))
    .await
}
