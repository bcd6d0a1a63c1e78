use tracing::trace;

use super::catalog::IinPattern;
use crate::model::brand::Brand;

/// Strip spaces and dashes. `None` when anything but ASCII digits remains.
pub(crate) fn normalize(number: &str) -> Option<String> {
    let digits: String = number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

struct Candidate {
    brand: Brand,
    strength: Option<usize>,
}

/// Pick the brand for already normalized digits.
///
/// One candidate is collected per brand (its first matching pattern). When
/// every candidate fully covers its pattern, the longest pattern wins and
/// earlier entries win ties. Otherwise only a lone candidate is accepted.
pub(crate) fn resolve<'a, I>(entries: I, digits: &str) -> Brand
where
    I: IntoIterator<Item = (Brand, &'a [IinPattern])>,
{
    let candidates: Vec<Candidate> = entries
        .into_iter()
        .filter_map(|(brand, patterns)| {
            patterns
                .iter()
                .find(|pattern| pattern.matches(digits))
                .map(|pattern| Candidate {
                    brand,
                    strength: pattern.strength(digits),
                })
        })
        .collect();

    let brand = match candidates.as_slice() {
        [] => Brand::Unknown,
        [only] => only.brand,
        many if many.iter().all(|c| c.strength.is_some()) => {
            let mut best = &many[0];
            for candidate in &many[1..] {
                if candidate.strength > best.strength {
                    best = candidate;
                }
            }
            best.brand
        }
        _ => Brand::Unknown,
    };

    trace!(
        digits = digits.len(),
        candidates = candidates.len(),
        brand = brand.id(),
        "resolved card brand"
    );
    brand
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize("4111 1111-1111\t1111").as_deref(), Some("4111111111111111"));
    }

    #[test]
    fn normalize_rejects_letters_and_empty() {
        assert_eq!(normalize("4111 abcd"), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("４１"), None);
    }

    #[test]
    fn strongest_full_match_wins() {
        let entries: [(Brand, &[IinPattern]); 2] = [
            (Brand::Visa, &[IinPattern::Prefix(4)]),
            (Brand::Elo, &[IinPattern::Prefix(401178)]),
        ];
        assert_eq!(resolve(entries, "4011789"), Brand::Elo);
    }

    #[test]
    fn partial_candidate_makes_result_ambiguous() {
        let entries: [(Brand, &[IinPattern]); 2] = [
            (Brand::Visa, &[IinPattern::Prefix(4)]),
            (Brand::Elo, &[IinPattern::Prefix(401178)]),
        ];
        assert_eq!(resolve(entries, "40"), Brand::Unknown);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let entries: [(Brand, &[IinPattern]); 2] = [
            (Brand::Mir, &[IinPattern::Prefix(22)]),
            (Brand::Mastercard, &[IinPattern::Prefix(22)]),
        ];
        assert_eq!(resolve(entries, "2200"), Brand::Mir);
    }

    #[test]
    fn lone_partial_candidate_is_accepted() {
        let entries: [(Brand, &[IinPattern]); 1] =
            [(Brand::Jcb, &[IinPattern::Range(3528, 3589)])];
        assert_eq!(resolve(entries, "35"), Brand::Jcb);
    }
}
