use crate::models::{Club, ClubFilters};

/// Check a club against the AND-combined hard filters
///
/// Hard filters exclude candidates outright, before any scoring happens.
/// Every supplied filter must hold; absent filters impose no constraint.
pub fn matches_filters(club: &Club, filters: &ClubFilters) -> bool {
    if let Some(tier) = filters.price_tier {
        if club.price_tier != Some(tier) {
            return false;
        }
    }

    if let Some(difficulty) = filters.difficulty {
        if club.difficulty != Some(difficulty) {
            return false;
        }
    }

    if let Some(holes) = &filters.number_of_holes {
        match &club.number_of_holes {
            Some(have) if have.eq_ignore_ascii_case(holes) => {}
            _ => return false,
        }
    }

    if let Some(membership) = &filters.club_membership {
        match &club.club_membership {
            Some(have) if have.eq_ignore_ascii_case(membership) => {}
            _ => return false,
        }
    }

    // One-directional boolean flags: only required-true flags constrain
    if !club.amenities.satisfies(&filters.amenities) {
        return false;
    }
    if !club.services.satisfies(&filters.services) {
        return false;
    }

    // Technology list is OR within itself, AND with everything above
    if !filters.technologies.is_empty() && !has_any_technology(club, &filters.technologies) {
        return false;
    }

    true
}

/// True when the club offers at least one of the named technologies
pub fn has_any_technology(club: &Club, wanted: &[String]) -> bool {
    wanted.iter().any(|name| {
        club.technologies
            .iter()
            .any(|have| have.eq_ignore_ascii_case(name))
    })
}

/// Number of technology tags shared between club and preference list
pub fn shared_technology_count(club_technologies: &[String], wanted: &[String]) -> usize {
    wanted
        .iter()
        .filter(|name| {
            club_technologies
                .iter()
                .any(|have| have.eq_ignore_ascii_case(name))
        })
        .count()
}
