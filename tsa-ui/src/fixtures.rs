//! Canned demo dataset
//!
//! Every API response is built from this fixture set when no backend is
//! configured. Values are stable so the demo walkthrough always tells
//! the same story: one client, one statement period, three
//! recommendations worth $25,200 a year.

use crate::models::*;
use serde_json::json;

pub const CLIENT_ID: &str = "client-001";
pub const UPLOAD_ID: &str = "upload-001";
pub const BANK_CONNECTION_UPLOAD_ID: &str = "bank-connection-001";
pub const REPORT_ID: &str = "report-001";

pub fn client() -> Client {
    Client {
        id: CLIENT_ID.to_string(),
        name: "TechCorp Solutions Inc.".to_string(),
        account_ids: vec![
            "acc-001".to_string(),
            "acc-002".to_string(),
            "acc-003".to_string(),
        ],
        relationship_manager: "Sarah Johnson".to_string(),
        created_at: "2024-01-15T10:00:00Z".to_string(),
        updated_at: "2024-10-20T14:30:00Z".to_string(),
    }
}

pub fn transactions() -> Vec<Transaction> {
    fn txn(
        id: &str,
        date: &str,
        amount: f64,
        transaction_type: TransactionType,
        category: &str,
        description: &str,
        account_id: &str,
        metadata: Option<serde_json::Value>,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: date.to_string(),
            amount,
            transaction_type,
            category: category.to_string(),
            description: description.to_string(),
            account_id: account_id.to_string(),
            metadata,
        }
    }

    vec![
        txn(
            "txn-001",
            "2024-10-20",
            50000.0,
            TransactionType::Inflow,
            "Revenue",
            "Customer payment - Invoice #12345",
            "acc-001",
            Some(json!({ "invoiceId": "12345", "customerId": "cust-001" })),
        ),
        txn(
            "txn-002",
            "2024-10-19",
            -12000.0,
            TransactionType::Outflow,
            "Payroll",
            "Employee salaries - October 2024",
            "acc-001",
            None,
        ),
        txn(
            "txn-003",
            "2024-10-18",
            25000.0,
            TransactionType::Inflow,
            "Revenue",
            "Service contract payment",
            "acc-002",
            None,
        ),
        txn(
            "txn-004",
            "2024-10-17",
            -8500.0,
            TransactionType::Outflow,
            "Operating Expenses",
            "Office rent - October 2024",
            "acc-001",
            None,
        ),
        txn(
            "txn-005",
            "2024-10-16",
            -3200.0,
            TransactionType::Outflow,
            "Utilities",
            "Electricity and internet bills",
            "acc-001",
            None,
        ),
        txn(
            "txn-006",
            "2024-10-15",
            75000.0,
            TransactionType::Inflow,
            "Revenue",
            "Large client payment - Q4 contract",
            "acc-002",
            None,
        ),
        txn(
            "txn-007",
            "2024-10-14",
            -15000.0,
            TransactionType::Outflow,
            "Inventory",
            "Raw materials purchase",
            "acc-003",
            None,
        ),
        txn(
            "txn-008",
            "2024-10-13",
            30000.0,
            TransactionType::Inflow,
            "Revenue",
            "Monthly subscription revenues",
            "acc-001",
            None,
        ),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "prod-001".to_string(),
            name: "Corporate Sweep Account".to_string(),
            product_type: ProductType::SweepAccount,
            description: "Automatically sweep excess funds to high-yield savings, maximizing \
                          interest earnings while maintaining liquidity."
                .to_string(),
            eligibility_rules: EligibilityRules {
                min_balance: Some(50000.0),
                transaction_volume: Some(100),
                business_type: None,
            },
            benefit_type: BenefitType::InterestEarning,
            estimated_annual_benefit: Some(8400.0),
            features: vec![
                "Automatic overnight sweeping".to_string(),
                "Competitive interest rates".to_string(),
                "24/7 liquidity access".to_string(),
                "Real-time balance monitoring".to_string(),
            ],
        },
        Product {
            id: "prod-002".to_string(),
            name: "Zero Balance Account".to_string(),
            product_type: ProductType::ZeroBalance,
            description: "Maintain precise cash levels with automatic transfers, eliminating \
                          idle cash and overdraft risks."
                .to_string(),
            eligibility_rules: EligibilityRules {
                min_balance: Some(25000.0),
                transaction_volume: Some(200),
                business_type: None,
            },
            benefit_type: BenefitType::LiquidityManagement,
            estimated_annual_benefit: Some(4800.0),
            features: vec![
                "Automatic fund concentration".to_string(),
                "Overdraft protection".to_string(),
                "Simplified cash management".to_string(),
                "Reduced banking fees".to_string(),
            ],
        },
        Product {
            id: "prod-003".to_string(),
            name: "Enhanced Merchant Services".to_string(),
            product_type: ProductType::MerchantServices,
            description: "Optimize payment processing with competitive rates and advanced \
                          fraud protection."
                .to_string(),
            eligibility_rules: EligibilityRules {
                min_balance: None,
                transaction_volume: Some(1000),
                business_type: Some(vec![
                    "retail".to_string(),
                    "ecommerce".to_string(),
                    "services".to_string(),
                ]),
            },
            benefit_type: BenefitType::FeeReduction,
            estimated_annual_benefit: Some(3600.0),
            features: vec![
                "Lower processing fees".to_string(),
                "Advanced fraud protection".to_string(),
                "Multi-channel payments".to_string(),
                "Real-time reporting".to_string(),
            ],
        },
        Product {
            id: "prod-004".to_string(),
            name: "Treasury Management Platform".to_string(),
            product_type: ProductType::TreasuryManagement,
            description: "Comprehensive cash management with forecasting, reporting, and \
                          automated workflows."
                .to_string(),
            eligibility_rules: EligibilityRules {
                min_balance: Some(100000.0),
                transaction_volume: Some(500),
                business_type: None,
            },
            benefit_type: BenefitType::Efficiency,
            estimated_annual_benefit: Some(12000.0),
            features: vec![
                "Cash flow forecasting".to_string(),
                "Automated reporting".to_string(),
                "Multi-bank connectivity".to_string(),
                "Risk management tools".to_string(),
            ],
        },
    ]
}

pub fn recommendations() -> Vec<Recommendation> {
    let products = products();

    fn rec(
        id: &str,
        product: Product,
        priority: Priority,
        rationale: &str,
        data_points: DataPoints,
        amount: f64,
        confidence: Confidence,
    ) -> Recommendation {
        Recommendation {
            id: id.to_string(),
            client_id: CLIENT_ID.to_string(),
            product_id: product.id.clone(),
            priority,
            rationale: rationale.to_string(),
            data_points,
            estimated_benefit: EstimatedBenefit {
                amount,
                period: BenefitPeriod::Annually,
                currency: "USD".to_string(),
                confidence,
            },
            status: RecommendationStatus::Pending,
            created_at: "2024-10-20T10:00:00Z".to_string(),
            updated_at: "2024-10-20T10:00:00Z".to_string(),
            product,
        }
    }

    vec![
        rec(
            "rec-001",
            products[0].clone(),
            Priority::High,
            "Your average daily balance of $185,000 with frequent large deposits suggests \
             significant opportunity for interest optimization. A sweep account could earn \
             an additional $8,400 annually.",
            DataPoints {
                avg_daily_balance: Some(185000.0),
                monthly_transaction_count: Some(45),
                idle_cash_amount: Some(120000.0),
                efficiency_gain: None,
            },
            8400.0,
            Confidence::High,
        ),
        rec(
            "rec-002",
            products[3].clone(),
            Priority::High,
            "With complex cash flows across 3 accounts and $200+ monthly transactions, a \
             treasury management platform would streamline operations and provide better \
             visibility.",
            DataPoints {
                avg_daily_balance: Some(185000.0),
                monthly_transaction_count: Some(235),
                idle_cash_amount: None,
                efficiency_gain: Some("15 hours/month saved".to_string()),
            },
            12000.0,
            Confidence::High,
        ),
        rec(
            "rec-003",
            products[1].clone(),
            Priority::Medium,
            "Zero balance accounts could optimize cash positioning across your subsidiary \
             accounts, reducing float and improving fund utilization.",
            DataPoints {
                avg_daily_balance: Some(85000.0),
                monthly_transaction_count: Some(156),
                idle_cash_amount: Some(45000.0),
                efficiency_gain: None,
            },
            4800.0,
            Confidence::Medium,
        ),
    ]
}

pub fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        total_balance: 285000.0,
        avg_daily_balance: 185000.0,
        monthly_inflow: 180000.0,
        monthly_outflow: -38700.0,
        net_cash_flow: 141300.0,
        idle_cash_amount: 120000.0,
        transaction_count: 235,
        liquidity: Liquidity {
            current: 0.85,
            trend: LiquidityTrend::Stable,
            risk_level: RiskLevel::Low,
        },
        period: DateRange {
            start: "2024-09-20".to_string(),
            end: "2024-10-20".to_string(),
        },
    }
}

pub fn chart_data() -> Vec<ChartPoint> {
    const POINTS: [(&str, f64, f64, f64); 20] = [
        ("2024-10-01", 45000.0, -12000.0, 248000.0),
        ("2024-10-02", 0.0, -3500.0, 244500.0),
        ("2024-10-03", 25000.0, -8000.0, 261500.0),
        ("2024-10-04", 15000.0, -2200.0, 274300.0),
        ("2024-10-05", 0.0, -1800.0, 272500.0),
        ("2024-10-06", 30000.0, -15000.0, 287500.0),
        ("2024-10-07", 12000.0, -4500.0, 295000.0),
        ("2024-10-08", 8000.0, -6200.0, 296800.0),
        ("2024-10-09", 35000.0, -9800.0, 322000.0),
        ("2024-10-10", 0.0, -3200.0, 318800.0),
        ("2024-10-11", 18000.0, -7500.0, 329300.0),
        ("2024-10-12", 42000.0, -12000.0, 359300.0),
        ("2024-10-13", 30000.0, -15000.0, 374300.0),
        ("2024-10-14", 0.0, -8500.0, 365800.0),
        ("2024-10-15", 75000.0, -3200.0, 437600.0),
        ("2024-10-16", 0.0, -12000.0, 425600.0),
        ("2024-10-17", 0.0, -8500.0, 417100.0),
        ("2024-10-18", 25000.0, 0.0, 442100.0),
        ("2024-10-19", 0.0, -12000.0, 430100.0),
        ("2024-10-20", 50000.0, 0.0, 480100.0),
    ];

    POINTS
        .iter()
        .map(|(date, inflow, outflow, balance)| ChartPoint {
            date: date.to_string(),
            inflow: *inflow,
            outflow: *outflow,
            balance: *balance,
        })
        .collect()
}

pub fn bank_connections() -> Vec<BankConnection> {
    vec![
        BankConnection {
            id: "bank-001".to_string(),
            bank_name: "Chase Business Banking".to_string(),
            account_type: "checking".to_string(),
            connection_status: ConnectionStatus::Connected,
            last_sync: Some("2024-10-20T08:00:00Z".to_string()),
            credentials: Some(BankCredentials {
                username: "techcorp_admin".to_string(),
                institution_id: "chase_business".to_string(),
            }),
        },
        BankConnection {
            id: "bank-002".to_string(),
            bank_name: "Wells Fargo Corporate".to_string(),
            account_type: "savings".to_string(),
            connection_status: ConnectionStatus::Pending,
            last_sync: None,
            credentials: Some(BankCredentials {
                username: "techcorp_treasury".to_string(),
                institution_id: "wells_fargo_corp".to_string(),
            }),
        },
    ]
}

pub fn upload_response() -> UploadResponse {
    UploadResponse {
        upload_id: UPLOAD_ID.to_string(),
        status: UploadStatus::Processing,
        message: "File uploaded successfully. Processing bank statement...".to_string(),
    }
}

pub fn bank_connection_response() -> UploadResponse {
    UploadResponse {
        upload_id: BANK_CONNECTION_UPLOAD_ID.to_string(),
        status: UploadStatus::Processing,
        message: "Bank connection established successfully. Importing transaction data..."
            .to_string(),
    }
}

pub fn parse_status_response() -> ParseStatusResponse {
    ParseStatusResponse {
        id: UPLOAD_ID.to_string(),
        status: ParseStatus::Completed,
        progress: 100,
        result: Some(ParseResult {
            transaction_count: 235,
            date_range: DateRange {
                start: "2024-09-20".to_string(),
                end: "2024-10-20".to_string(),
            },
            categories: vec![
                "Revenue".to_string(),
                "Payroll".to_string(),
                "Operating Expenses".to_string(),
                "Utilities".to_string(),
                "Inventory".to_string(),
            ],
        }),
        error: None,
    }
}

pub fn dashboard_response() -> DashboardResponse {
    DashboardResponse {
        client: client(),
        metrics: dashboard_metrics(),
        transactions: transactions(),
        chart_data: chart_data(),
    }
}

pub fn recommendations_response() -> RecommendationsResponse {
    RecommendationsResponse {
        recommendations: recommendations(),
        total_benefit: TotalBenefit {
            amount: 25200.0,
            period: BenefitPeriod::Annually,
            currency: "USD".to_string(),
        },
    }
}

pub fn report_data() -> ReportData {
    ReportData {
        client: client(),
        metrics: dashboard_metrics(),
        recommendations: recommendations(),
        summary: ReportSummary {
            key_findings: vec![
                "Significant idle cash opportunity ($120k average)".to_string(),
                "Complex multi-account structure needs optimization".to_string(),
                "High transaction volume suitable for automation".to_string(),
                "Strong cash flow patterns indicate low liquidity risk".to_string(),
            ],
            total_potential_savings: 25200.0,
            implementation_priority: "Recommend implementing sweep account first for \
                                      immediate impact, followed by treasury management \
                                      platform for operational efficiency."
                .to_string(),
        },
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_benefits_sum_to_total() {
        let response = recommendations_response();
        let sum: f64 = response
            .recommendations
            .iter()
            .map(|r| r.estimated_benefit.amount)
            .sum();
        assert_eq!(sum, response.total_benefit.amount);
    }

    #[test]
    fn recommendations_join_their_products() {
        for rec in recommendations() {
            assert_eq!(rec.product_id, rec.product.id);
            assert_eq!(rec.client_id, CLIENT_ID);
        }
    }

    #[test]
    fn chart_covers_twenty_days() {
        let chart = chart_data();
        assert_eq!(chart.len(), 20);
        assert_eq!(chart[0].date, "2024-10-01");
        assert_eq!(chart[19].balance, 480100.0);
    }
}
