// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-side helpers over the stored collections.

use linkclean_core::{MajorCategory, PortfolioItem, ServiceCategory, ServiceInfo};

/// Portfolio entries tagged with `major`, or all of them for `None`.
///
/// Order is preserved, so results stay most-recent-first.
pub fn portfolio_by_major(
    portfolio: &[PortfolioItem],
    major: Option<MajorCategory>,
) -> Vec<&PortfolioItem> {
    portfolio
        .iter()
        .filter(|item| major.is_none_or(|m| item.major_category == m))
        .collect()
}

/// Sub-categories offered on the contact form, in catalog order.
pub fn service_options(services: &[ServiceInfo]) -> Vec<ServiceCategory> {
    let mut options = Vec::new();
    for sub in services.iter().flat_map(|s| s.sub_categories.iter().copied()) {
        if !options.contains(&sub) {
            options.push(sub);
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use linkclean_core::defaults::{initial_portfolio, initial_services};

    use super::*;

    #[test]
    fn filter_by_major_keeps_order() {
        let portfolio = initial_portfolio();
        let professional = portfolio_by_major(&portfolio, Some(MajorCategory::Professional));
        assert_eq!(professional.len(), 2);
        assert_eq!(professional[0].id.as_str(), "p1");

        assert!(portfolio_by_major(&portfolio, Some(MajorCategory::Appliance)).is_empty());
        assert_eq!(portfolio_by_major(&portfolio, None).len(), 2);
    }

    #[test]
    fn options_follow_catalog_order() {
        let options = service_options(&initial_services());
        assert_eq!(options.first(), Some(&ServiceCategory::MoveIn));
        assert_eq!(options.last(), Some(&ServiceCategory::RangeHood));
        assert_eq!(options.len(), 18);
        // Preventive services come before appliances in the catalog.
        let grout = options.iter().position(|c| *c == ServiceCategory::GroutSealing);
        let aircon = options.iter().position(|c| *c == ServiceCategory::AirConditioner);
        assert!(grout < aircon);
    }
}
