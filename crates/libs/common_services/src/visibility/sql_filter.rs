use super::{AlbumFilter, PhotoFilter, PhotoVisibility};
use sqlx::{Postgres, QueryBuilder};

impl AlbumFilter {
    /// Appends the filter as a boolean SQL expression over the album table
    /// aliased as `alias`. User ids are bound, never inlined.
    pub fn push_sql(&self, qb: &mut QueryBuilder<'_, Postgres>, alias: &str) {
        match self {
            Self::All => {
                qb.push("TRUE");
            }
            Self::Viewable => {
                qb.push(format!("{alias}.viewable"));
            }
            Self::PubliclyViewable => {
                qb.push(format!("({alias}.is_public AND {alias}.viewable)"));
            }
            Self::OwnedBy(user_id) => {
                qb.push(format!("{alias}.owner_id = ")).push_bind(*user_id);
            }
            Self::SharedWith(user_id) => {
                qb.push(format!(
                    "EXISTS (SELECT 1 FROM album_shared_user asu WHERE asu.album_id = {alias}.id AND asu.user_id = "
                ))
                .push_bind(*user_id)
                .push(")");
            }
            Self::Any(filters) if filters.is_empty() => {
                qb.push("FALSE");
            }
            Self::Any(filters) => {
                qb.push("(");
                for (i, filter) in filters.iter().enumerate() {
                    if i > 0 {
                        qb.push(" OR ");
                    }
                    filter.push_sql(qb, alias);
                }
                qb.push(")");
            }
        }
    }
}

impl PhotoFilter {
    pub fn push_sql(&self, qb: &mut QueryBuilder<'_, Postgres>, alias: &str) {
        match self {
            Self::Nothing => {
                qb.push("FALSE");
            }
            Self::Unsorted => {
                qb.push(format!("{alias}.album_id IS NULL"));
            }
            Self::UnsortedOwnedBy(user_id) => {
                qb.push(format!("({alias}.album_id IS NULL AND {alias}.owner_id = "))
                    .push_bind(*user_id)
                    .push(")");
            }
            Self::Public => {
                qb.push(format!("{alias}.is_public"));
            }
        }
    }
}

impl PhotoVisibility {
    /// Appends the photo visibility union over the photo table aliased as
    /// `alias`. The visible album ids are computed by a sub-select.
    pub fn push_sql(&self, qb: &mut QueryBuilder<'_, Postgres>, alias: &str) {
        qb.push(format!(
            "({alias}.album_id IN (SELECT va.id FROM album va WHERE "
        ));
        self.albums.push_sql(qb, "va");
        qb.push(") OR ");
        self.unsorted_or_public.push_sql(qb, alias);
        qb.push(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(push: impl FnOnce(&mut QueryBuilder<'static, Postgres>)) -> String {
        let mut qb = QueryBuilder::new("");
        push(&mut qb);
        qb.sql().to_owned()
    }

    #[test]
    fn test_simple_filters() {
        assert_eq!(render(|qb| AlbumFilter::All.push_sql(qb, "a")), "TRUE");
        assert_eq!(render(|qb| AlbumFilter::Viewable.push_sql(qb, "a")), "a.viewable");
        assert_eq!(
            render(|qb| AlbumFilter::PubliclyViewable.push_sql(qb, "a")),
            "(a.is_public AND a.viewable)"
        );
        assert_eq!(render(|qb| AlbumFilter::Any(vec![]).push_sql(qb, "a")), "FALSE");
    }

    #[test]
    fn test_user_filter_binds_ids() {
        let filter = AlbumFilter::Any(vec![
            AlbumFilter::OwnedBy(7),
            AlbumFilter::SharedWith(7),
            AlbumFilter::PubliclyViewable,
        ]);

        assert_eq!(
            render(|qb| filter.push_sql(qb, "a")),
            "(a.owner_id = $1 OR EXISTS (SELECT 1 FROM album_shared_user asu \
             WHERE asu.album_id = a.id AND asu.user_id = $2) OR (a.is_public AND a.viewable))"
        );
    }

    #[test]
    fn test_photo_visibility() {
        let visibility = PhotoVisibility {
            albums: AlbumFilter::PubliclyViewable,
            unsorted_or_public: PhotoFilter::UnsortedOwnedBy(3),
        };

        assert_eq!(
            render(|qb| visibility.push_sql(qb, "p")),
            "(p.album_id IN (SELECT va.id FROM album va WHERE (va.is_public AND va.viewable)) \
             OR (p.album_id IS NULL AND p.owner_id = $1))"
        );
    }

    #[test]
    fn test_photo_filters() {
        assert_eq!(render(|qb| PhotoFilter::Nothing.push_sql(qb, "p")), "FALSE");
        assert_eq!(
            render(|qb| PhotoFilter::Unsorted.push_sql(qb, "p")),
            "p.album_id IS NULL"
        );
        assert_eq!(render(|qb| PhotoFilter::Public.push_sql(qb, "p")), "p.is_public");
    }
}
