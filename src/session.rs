//! Two-screen quotation session
//!
//! Models the interaction flow of the quotation tool: a form screen where
//! client and presenter details are entered, and a quotation screen showing
//! the priced result with a download action. Going back to the form keeps
//! every entry, and submitting again replaces the previous quotation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::quote::{
    quote, EducationLevel, Gender, PresenterInfo, Quotation, QuotationInput, SmokerStatus,
};
use crate::rates::RateTable;
use crate::render::{render_quotation, QUOTATION_FILENAME, QUOTATION_MIME};

/// Which of the two screens the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Form,
    Quotation,
}

/// Current entries on the quotation form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub client_name: String,
    pub age: u8,
    pub gender: Gender,
    pub smoker_status: SmokerStatus,
    pub education: EducationLevel,
    pub sum_assured: u64,
    pub presenter_name: String,
    pub distribution_channel: String,
    pub presenter_code: String,
}

impl Default for FormState {
    /// Initial form entries: a 30 year old male smoker with tertiary
    /// education and a 1,000,000 KShs sum assured
    fn default() -> Self {
        Self {
            client_name: String::new(),
            age: 30,
            gender: Gender::Male,
            smoker_status: SmokerStatus::Smoker,
            education: EducationLevel::Tertiary,
            sum_assured: 1_000_000,
            presenter_name: String::new(),
            distribution_channel: String::new(),
            presenter_code: String::new(),
        }
    }
}

impl FormState {
    fn to_input(&self) -> QuotationInput {
        QuotationInput {
            client_name: self.client_name.clone(),
            age: self.age,
            gender: self.gender,
            smoker_status: self.smoker_status,
            education: self.education,
            sum_assured: self.sum_assured,
        }
    }

    fn to_presenter(&self) -> PresenterInfo {
        PresenterInfo {
            presenter_name: Some(self.presenter_name.clone()),
            distribution_channel: Some(self.distribution_channel.clone()),
            presenter_code: Some(self.presenter_code.clone()),
        }
        .normalized()
    }
}

/// A rendered document ready to hand to the client
#[derive(Debug, Clone)]
pub struct Download {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// State machine driving one quotation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSession {
    screen: Screen,
    form: FormState,
    quotation: Option<Quotation>,
}

impl QuoteSession {
    /// Start on the form screen with the default entries
    pub fn new() -> Self {
        Self {
            screen: Screen::Form,
            form: FormState::default(),
            quotation: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// The quotation shown on the quotation screen, if one has been priced
    pub fn quotation(&self) -> Option<&Quotation> {
        self.quotation.as_ref()
    }

    /// Price the current form entries and move to the quotation screen
    ///
    /// On failure the session is left untouched: the form keeps its entries
    /// and any previously priced quotation stays available.
    pub fn submit(&mut self, table: &RateTable) -> Result<(), QuoteError> {
        let quotation = quote(table, self.form.to_input(), self.form.to_presenter())?;
        self.quotation = Some(quotation);
        self.screen = Screen::Quotation;
        Ok(())
    }

    /// Return to the form screen, keeping all entries for editing
    pub fn go_back(&mut self) {
        self.screen = Screen::Form;
    }

    /// Render the current quotation for download
    pub fn download(&self, branding: Option<&Path>) -> Result<Download, QuoteError> {
        let quotation = self
            .quotation
            .as_ref()
            .ok_or_else(|| QuoteError::render("no quotation to download"))?;
        let bytes = render_quotation(quotation, branding)?;
        Ok(Download {
            filename: QUOTATION_FILENAME,
            content_type: QUOTATION_MIME,
            bytes,
        })
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::load_rate_table;
    use rust_decimal_macros::dec;

    fn table() -> RateTable {
        load_rate_table("data/per_mille_rates.csv").unwrap()
    }

    #[test]
    fn test_new_session_starts_on_form_with_defaults() {
        let session = QuoteSession::new();

        assert_eq!(session.screen(), Screen::Form);
        assert!(session.quotation().is_none());
        assert_eq!(session.form().age, 30);
        assert_eq!(session.form().gender, Gender::Male);
        assert_eq!(session.form().smoker_status, SmokerStatus::Smoker);
        assert_eq!(session.form().education, EducationLevel::Tertiary);
        assert_eq!(session.form().sum_assured, 1_000_000);
        assert!(session.form().client_name.is_empty());
    }

    #[test]
    fn test_submit_moves_to_quotation_screen() {
        let table = table();
        let mut session = QuoteSession::new();
        session.form_mut().client_name = "Jane Mwangi".to_string();

        session.submit(&table).unwrap();

        assert_eq!(session.screen(), Screen::Quotation);
        let quotation = session.quotation().unwrap();
        assert_eq!(quotation.input.client_name, "Jane Mwangi");
        assert_eq!(quotation.input.age, 30);
        assert!(quotation.breakdown.is_consistent());
    }

    #[test]
    fn test_submit_failure_leaves_session_untouched() {
        let table = table();
        let mut session = QuoteSession::new();
        session.form_mut().age = 56;

        let before = session.clone();
        let err = session.submit(&table).unwrap_err();

        assert!(matches!(err, QuoteError::InvalidInput(_)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_go_back_keeps_entries_and_quotation() {
        let table = table();
        let mut session = QuoteSession::new();
        session.form_mut().client_name = "Jane Mwangi".to_string();
        session.form_mut().sum_assured = 2_000_000;
        session.submit(&table).unwrap();

        session.go_back();

        assert_eq!(session.screen(), Screen::Form);
        assert_eq!(session.form().client_name, "Jane Mwangi");
        assert_eq!(session.form().sum_assured, 2_000_000);
        assert!(session.quotation().is_some());
    }

    #[test]
    fn test_resubmit_replaces_quotation() {
        let table = table();
        let mut session = QuoteSession::new();
        session.submit(&table).unwrap();
        let first_total = session.quotation().unwrap().breakdown.total;

        session.go_back();
        session.form_mut().sum_assured = 2_000_000;
        session.submit(&table).unwrap();

        let second = session.quotation().unwrap();
        assert_eq!(second.input.sum_assured, 2_000_000);
        assert_eq!(second.breakdown.total - dec!(40), (first_total - dec!(40)) * dec!(2));
    }

    #[test]
    fn test_presenter_entries_flow_through_normalized() {
        let table = table();
        let mut session = QuoteSession::new();
        session.form_mut().presenter_name = "Peter Otieno".to_string();
        session.form_mut().distribution_channel = "   ".to_string();
        session.submit(&table).unwrap();

        let presenter = &session.quotation().unwrap().presenter;
        assert_eq!(presenter.presenter_name.as_deref(), Some("Peter Otieno"));
        assert_eq!(presenter.distribution_channel, None);
        assert_eq!(presenter.presenter_code, None);
    }

    #[test]
    fn test_download_without_quotation_fails() {
        let session = QuoteSession::new();
        let err = session.download(None).unwrap_err();
        assert!(matches!(err, QuoteError::Render(_)));
    }

    #[test]
    fn test_download_returns_named_pdf() {
        let table = table();
        let mut session = QuoteSession::new();
        session.submit(&table).unwrap();

        let download = session.download(None).unwrap();
        assert_eq!(download.filename, "Platinum_Life_Quotation.pdf");
        assert_eq!(download.content_type, "application/pdf");
        assert!(download.bytes.starts_with(b"%PDF"));
    }
}
