//! Template registry and metadata

use shared_types::{Field, FieldOption, FieldType, Template};

use super::embedded;

/// List all available templates
pub fn list_templates() -> Vec<Template> {
    vec![
        employment_contract(),
        residential_lease(),
        power_of_attorney(),
        demand_letter(),
    ]
}

/// Look up a template by id
pub fn get_template(id: &str) -> Option<Template> {
    list_templates().into_iter().find(|t| t.id == id)
}

fn employment_contract() -> Template {
    Template {
        id: "employment_contract".to_string(),
        title: "Employment contract".to_string(),
        description: "Standard employment contract with optional probation clause".to_string(),
        fields: vec![
            Field::required("employer", "Employer", FieldType::Text),
            Field::required("employee", "Employee full name", FieldType::Text),
            Field::required("position", "Position", FieldType::Text),
            Field::required("city", "City", FieldType::Text),
            Field::required("contract_date", "Contract date", FieldType::Date),
            Field::required("start_date", "First working day", FieldType::Date),
            Field::required("salary", "Monthly salary", FieldType::Number),
            Field::required("contract_type", "Contract term", FieldType::Select).with_options(
                vec![
                    FieldOption::new("permanent", "Indefinite term"),
                    FieldOption::new("fixed_term", "Fixed term"),
                ],
            ),
            Field::optional("probation", "Probationary period", FieldType::Checkbox),
            Field::optional("notes", "Additional terms", FieldType::Textarea),
        ],
        content: embedded::EMPLOYMENT_CONTRACT.to_string(),
    }
}

fn residential_lease() -> Template {
    Template {
        id: "residential_lease".to_string(),
        title: "Residential lease agreement".to_string(),
        description: "Lease of residential premises with rent, deposit, and pet terms"
            .to_string(),
        fields: vec![
            Field::required("landlord", "Landlord", FieldType::Text),
            Field::required("tenant", "Tenant", FieldType::Text),
            Field::required("property_address", "Address of the premises", FieldType::Text),
            Field::required("monthly_rent", "Monthly rent", FieldType::Number),
            Field::optional("deposit", "Security deposit", FieldType::Number),
            Field::required("lease_start", "Lease start date", FieldType::Date),
            Field::required("lease_end", "Lease end date", FieldType::Date),
            Field::required("pets_allowed", "Pets allowed", FieldType::Radio).with_options(vec![
                FieldOption::new("yes", "Yes"),
                FieldOption::new("no", "No"),
            ]),
            Field::optional("utilities_included", "Utilities included in rent", FieldType::Checkbox),
        ],
        content: embedded::RESIDENTIAL_LEASE.to_string(),
    }
}

fn power_of_attorney() -> Template {
    Template {
        id: "power_of_attorney".to_string(),
        title: "Power of attorney".to_string(),
        description: "General power of attorney with a defined scope of authority".to_string(),
        fields: vec![
            Field::required("principal", "Principal full name", FieldType::Text),
            Field::optional("principal_id", "Identity document", FieldType::Text),
            Field::required("agent", "Agent full name", FieldType::Text),
            Field::required("scope", "Scope of authority", FieldType::Textarea),
            Field::required("issue_date", "Date of issue", FieldType::Date),
            Field::required("valid_until", "Valid until", FieldType::Date),
            Field::optional("revocable", "Revocable", FieldType::Radio).with_options(vec![
                FieldOption::new("yes", "Yes"),
                FieldOption::new("no", "No"),
            ]),
        ],
        content: embedded::POWER_OF_ATTORNEY.to_string(),
    }
}

fn demand_letter() -> Template {
    Template {
        id: "demand_letter".to_string(),
        title: "Demand letter".to_string(),
        description: "Pre-court demand for payment of an outstanding debt".to_string(),
        fields: vec![
            Field::required("sender", "Sender", FieldType::Text),
            Field::required("recipient", "Recipient", FieldType::Text),
            Field::required("debt_amount", "Outstanding amount", FieldType::Number),
            Field::required("due_date", "Payment deadline", FieldType::Date),
            Field::required("basis", "Grounds for the claim", FieldType::Textarea),
            Field::optional("accrues_interest", "Interest accrues on the debt", FieldType::Checkbox),
            Field::optional("bank_details", "Payment details", FieldType::Textarea),
        ],
        content: embedded::DEMAND_LETTER.to_string(),
    }
}
