//! Sort contract for the author listing.

use crate::model::AuthorWorks;

/// Direction of the primary (author name) sort key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Lexicographically ascending by author name.
    #[default]
    Asc,
    /// Lexicographically descending by author name.
    Desc,
}

impl SortOrder {
    /// Resolves the optional order argument.
    ///
    /// Only a case-insensitive `"desc"` selects [`SortOrder::Desc`]; anything
    /// else, including an absent argument, falls back to [`SortOrder::Asc`].
    /// Unrecognized values are deliberately accepted rather than rejected.
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(arg) if arg.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Stable-sorts the listing by author name in the requested direction, with
/// revision as the tie-break for equal names.
///
/// The descending direction only swaps the operands of the *name* comparison,
/// so the revision tie-break stays ascending in both directions. Records that
/// are equal on both keys keep their relative order.
pub fn sort_authors(authors: &mut [AuthorWorks], order: SortOrder) {
    authors.sort_by(|a, b| {
        let by_name = match order {
            SortOrder::Asc => a.name.cmp(&b.name),
            SortOrder::Desc => b.name.cmp(&a.name),
        };
        by_name.then_with(|| a.revision.cmp(&b.revision))
    });
}

#[cfg(test)]
mod tests {
    use super::{sort_authors, SortOrder};
    use crate::model::{AuthorWorks, Work};

    fn author(name: &str, revision: u32) -> AuthorWorks {
        AuthorWorks {
            name: name.to_owned(),
            revision,
            books: Vec::new(),
        }
    }

    fn names(authors: &[AuthorWorks]) -> Vec<&str> {
        authors.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn from_arg_only_accepts_desc() {
        assert_eq!(SortOrder::Asc, SortOrder::from_arg(None));
        assert_eq!(SortOrder::Desc, SortOrder::from_arg(Some("desc")));
        assert_eq!(SortOrder::Desc, SortOrder::from_arg(Some("DESC")));
        assert_eq!(SortOrder::Desc, SortOrder::from_arg(Some("DeSc")));
        // Permissive fallback, not a validation error.
        assert_eq!(SortOrder::Asc, SortOrder::from_arg(Some("descending")));
        assert_eq!(SortOrder::Asc, SortOrder::from_arg(Some("asc")));
        assert_eq!(SortOrder::Asc, SortOrder::from_arg(Some("")));
    }

    #[test]
    fn asc_sorts_by_name_then_revision() {
        let mut authors = vec![
            author("Terry Pratchett", 97),
            author("Neil Gaiman", 81),
            author("Neil Gaiman", 12),
        ];

        sort_authors(&mut authors, SortOrder::Asc);

        assert_eq!(
            vec!["Neil Gaiman", "Neil Gaiman", "Terry Pratchett"],
            names(&authors)
        );
        assert_eq!(12, authors[0].revision);
        assert_eq!(81, authors[1].revision);
    }

    #[test]
    fn desc_reverses_names_only() {
        let mut authors = vec![
            author("Neil Gaiman", 81),
            author("Terry Pratchett", 97),
            author("Neil Gaiman", 12),
        ];

        sort_authors(&mut authors, SortOrder::Desc);

        assert_eq!(
            vec!["Terry Pratchett", "Neil Gaiman", "Neil Gaiman"],
            names(&authors)
        );
        // The tie-break stays ascending even when names are descending.
        assert_eq!(12, authors[1].revision);
        assert_eq!(81, authors[2].revision);
    }

    #[test]
    fn equal_keys_keep_their_relative_order() {
        let first = AuthorWorks {
            name: "Neil Gaiman".to_owned(),
            revision: 81,
            books: vec![Work {
                title: "Coraline".to_owned(),
                revision: 9,
            }],
        };
        let second = AuthorWorks {
            name: "Neil Gaiman".to_owned(),
            revision: 81,
            books: vec![Work {
                title: "Stardust".to_owned(),
                revision: 4,
            }],
        };

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mut authors = vec![first.clone(), second.clone()];
            sort_authors(&mut authors, order);

            assert_eq!("Coraline", authors[0].books[0].title, "{order:?}");
            assert_eq!("Stardust", authors[1].books[0].title, "{order:?}");
        }
    }
}
