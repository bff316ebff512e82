//! Domain models for the Treasury Solutions Agent API
//!
//! Wire format is camelCase JSON, matching the frontend contract. Dates
//! and timestamps travel as strings (`YYYY-MM-DD` / RFC 3339); nothing
//! here is persisted, so there is no separate storage representation.

use serde::{Deserialize, Serialize};

/// Bank client under review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub account_ids: Vec<String>,
    pub relationship_manager: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Inflow,
    Outflow,
}

/// One statement transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Transaction date, `YYYY-MM-DD`
    pub date: String,
    /// Signed amount in dollars; outflows are negative
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: String,
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    SweepAccount,
    ZeroBalance,
    MerchantServices,
    TreasuryManagement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitType {
    InterestEarning,
    FeeReduction,
    Efficiency,
    LiquidityManagement,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_volume: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<Vec<String>>,
}

/// Treasury product offered to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub description: String,
    pub eligibility_rules: EligibilityRules,
    pub benefit_type: BenefitType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_annual_benefit: Option<f64>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitPeriod {
    Monthly,
    Annually,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_daily_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_transaction_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_cash_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efficiency_gain: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedBenefit {
    pub amount: f64,
    pub period: BenefitPeriod,
    pub currency: String,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Product recommendation, served joined with its product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub client_id: String,
    pub product_id: String,
    pub priority: Priority,
    pub rationale: String,
    pub data_points: DataPoints,
    pub estimated_benefit: EstimatedBenefit,
    pub status: RecommendationStatus,
    pub created_at: String,
    pub updated_at: String,
    pub product: Product,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidityTrend {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liquidity {
    pub current: f64,
    pub trend: LiquidityTrend,
    pub risk_level: RiskLevel,
}

/// Inclusive date range, `YYYY-MM-DD` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_balance: f64,
    pub avg_daily_balance: f64,
    pub monthly_inflow: f64,
    pub monthly_outflow: f64,
    pub net_cash_flow: f64,
    pub idle_cash_amount: f64,
    pub transaction_count: u32,
    pub liquidity: Liquidity,
    pub period: DateRange,
}

/// One day of cash flow chart data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: String,
    pub inflow: f64,
    pub outflow: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Connected,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankCredentials {
    pub username: String,
    pub institution_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankConnection {
    pub id: String,
    pub bank_name: String,
    pub account_type: String,
    pub connection_status: ConnectionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<BankCredentials>,
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_name: String,
    #[serde(default)]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectBankRequest {
    pub bank_name: String,
    pub institution_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Pending,
    Processing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub upload_id: String,
    pub status: UploadStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub transaction_count: u32,
    pub date_range: DateRange,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStatusResponse {
    pub id: String,
    pub status: ParseStatus,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ParseResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub client: Client,
    pub metrics: DashboardMetrics,
    pub transactions: Vec<Transaction>,
    pub chart_data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalBenefit {
    pub amount: f64,
    pub period: BenefitPeriod,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    pub total_benefit: TotalBenefit,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    pub recommendation_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareReportRequest {
    pub report_id: String,
    pub email_addresses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Html,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    pub client_id: String,
    pub include_transactions: bool,
    pub include_recommendations: bool,
    pub include_charts: bool,
    pub date_range: DateRange,
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub key_findings: Vec<String>,
    pub total_potential_savings: f64,
    pub implementation_priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub client: Client,
    pub metrics: DashboardMetrics,
    pub recommendations: Vec<Recommendation>,
    pub summary: ReportSummary,
    pub generated_at: String,
}
