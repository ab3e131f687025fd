use contracts::projections::p900_occupancy_report::dto::{
    OccupancyReport, ReportQuery, RevenueReport,
};

use crate::shared::forms::{FieldKind, FieldSpec, FormSchema, FormState};
use crate::shared::http::ApiRequest;
use crate::shared::orchestrator::{Action, Orchestrator, RequestError};
use crate::shared::panel::{run_action, submit_form, EntityPanelSpec, PanelHandle};

pub const REPORT_ERROR: &str =
    "Failed to fetch report data. Make sure you're logged in as ADMIN.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportTab {
    Generate,
}

pub const REPORT_FORM: FormSchema = FormSchema {
    fields: &[FieldSpec::new("date", "Select Date", FieldKind::Date).required("Date is required")],
};

/// Both reports for one day
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub occupancy: OccupancyReport,
    pub revenue: RevenueReport,
}

pub struct ReportPanel;

impl EntityPanelSpec for ReportPanel {
    type Tab = ReportTab;
    type Row = ReportSummary;

    const TABS: &'static [ReportTab] = &[ReportTab::Generate];

    fn label(_tab: ReportTab) -> &'static str {
        "Generate Reports"
    }

    fn schema(_tab: ReportTab) -> Option<&'static FormSchema> {
        Some(&REPORT_FORM)
    }
}

fn report_request(kind: &str, form: &FormState) -> Result<ApiRequest, String> {
    let query = form.bind(&REPORT_FORM, |f| {
        Ok(ReportQuery {
            date: f.parse_date("date", "Date is required")?,
        })
    })?;
    ApiRequest::get_with_query(&format!("/api/reports/{}", kind), &query)
}

/// Failures are shown under the date picker instead of as toasts
pub fn occupancy_report(form: &FormState) -> Action<OccupancyReport> {
    Action::new(report_request("occupancy", form), REPORT_ERROR).quiet()
}

pub fn revenue_report(form: &FormState) -> Action<RevenueReport> {
    Action::new(report_request("revenue", form), REPORT_ERROR).quiet()
}

/// Occupancy first, then revenue; a failure of either discards both
pub async fn generate(
    orchestrator: &Orchestrator,
    panel: &impl PanelHandle<ReportPanel>,
) -> Result<ReportSummary, RequestError> {
    let tab = ReportTab::Generate;
    let occupancy = submit_form(orchestrator, panel, tab, occupancy_report).await?;
    let form = panel
        .inspect(|p| p.form(tab).cloned())
        .flatten()
        .ok_or(RequestError::Cancelled)?;
    let revenue = run_action(orchestrator, panel, revenue_report(&form)).await?;

    let summary = ReportSummary { occupancy, revenue };
    panel.modify(|p| p.set_rows(vec![summary.clone()]));
    Ok(summary)
}

/// Inline text for a failed generation; `None` when nothing should show
pub fn failure_text(error: &RequestError) -> Option<String> {
    match error {
        RequestError::Cancelled => None,
        RequestError::Validation(message) => Some(message.clone()),
        _ => Some(REPORT_ERROR.to_string()),
    }
}
