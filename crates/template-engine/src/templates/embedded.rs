//! Embedded template bodies
//!
//! Template content is loaded from external files at compile time and
//! embedded directly in the binary.

/// Employment contract - loaded from templates/employment_contract.txt
pub(super) const EMPLOYMENT_CONTRACT: &str =
    include_str!("../../templates/employment_contract.txt");

/// Residential lease - loaded from templates/residential_lease.txt
pub(super) const RESIDENTIAL_LEASE: &str = include_str!("../../templates/residential_lease.txt");

/// Power of attorney - loaded from templates/power_of_attorney.txt
pub(super) const POWER_OF_ATTORNEY: &str = include_str!("../../templates/power_of_attorney.txt");

/// Demand letter - loaded from templates/demand_letter.txt
pub(super) const DEMAND_LETTER: &str = include_str!("../../templates/demand_letter.txt");
