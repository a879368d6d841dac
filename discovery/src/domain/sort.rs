//! [`SortKey`] definitions.

use std::{cmp::Ordering, collections::BTreeSet};

use common::define_kind;
use serde::{Deserialize, Serialize};

use crate::domain::Listing;

define_kind! {
    #[doc = "Key ordering the visible [`Listing`]s."]
    enum SortKey {
        #[doc = "Original catalog order."]
        Catalog = 1,

        #[doc = "Cheapest first."]
        PriceAsc = 2,

        #[doc = "Most expensive first."]
        PriceDesc = 3,

        #[doc = "Smallest first."]
        AreaAsc = 4,

        #[doc = "Largest first."]
        AreaDesc = 5,

        #[doc = "Cheapest square meter first."]
        PricePerAreaAsc = 6,

        #[doc = "Most viewed first."]
        PopularityDesc = 7,

        #[doc = "Most sold building first."]
        SoldDesc = 8,
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Catalog
    }
}

impl SortKey {
    /// Returns [`Capability`] required to select this [`SortKey`], if any.
    #[must_use]
    pub const fn requires(self) -> Option<Capability> {
        match self {
            Self::PopularityDesc | Self::SoldDesc => {
                Some(Capability::SalesInsights)
            }
            Self::Catalog
            | Self::PriceAsc
            | Self::PriceDesc
            | Self::AreaAsc
            | Self::AreaDesc
            | Self::PricePerAreaAsc => None,
        }
    }

    /// Checks whether this [`SortKey`] may be selected with the provided
    /// [`Grants`].
    #[must_use]
    pub fn is_available(self, grants: &Grants) -> bool {
        self.requires().map_or(true, |c| grants.contains(c))
    }

    /// Returns all the [`SortKey`]s selectable with the provided [`Grants`].
    pub fn available(grants: &Grants) -> impl Iterator<Item = Self> + '_ {
        Self::ALL.iter().copied().filter(|k| k.is_available(grants))
    }

    /// Compares the provided [`Listing`]s according to this [`SortKey`].
    ///
    /// Equal [`Listing`]s are left to the stable sort to keep their catalog
    /// order.
    #[must_use]
    pub fn compare(self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            Self::Catalog => Ordering::Equal,
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
            Self::AreaAsc => a.area.cmp(&b.area),
            Self::AreaDesc => b.area.cmp(&a.area),
            Self::PricePerAreaAsc => a.price_per_area.cmp(&b.price_per_area),
            Self::PopularityDesc => b.stats.popularity.cmp(&a.stats.popularity),
            Self::SoldDesc => b.stats.sold.cmp(&a.stats.sold),
        }
    }
}

define_kind! {
    #[doc = "Capability granted to a consumer of the engine."]
    enum Capability {
        #[doc = "Access to the sales statistics of [`Listing`]s."]
        SalesInsights = 1,
    }
}

define_kind! {
    #[doc = "Role of a consumer of the engine."]
    enum Role {
        #[doc = "Buyer browsing the catalog."]
        Buyer = 1,

        #[doc = "Lister (agent or developer) managing the catalog."]
        Lister = 2,
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Buyer
    }
}

/// Set of [`Capability`]s granted to a consumer.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Grants(BTreeSet<Capability>);

impl Grants {
    /// Creates empty [`Grants`].
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns [`Grants`] of the provided [`Role`].
    #[must_use]
    pub fn of(role: Role) -> Self {
        match role {
            Role::Buyer => Self::none(),
            Role::Lister => Self::from_iter([Capability::SalesInsights]),
        }
    }

    /// Checks whether these [`Grants`] contain the provided [`Capability`].
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }
}

impl FromIterator<Capability> for Grants {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod spec {
    use std::cmp::Ordering;

    use crate::domain::test_listing;

    use super::{Grants, Role, SortKey};

    #[test]
    fn buyer_has_no_gated_keys() {
        let grants = Grants::of(Role::Buyer);

        assert!(SortKey::PriceAsc.is_available(&grants));
        assert!(!SortKey::PopularityDesc.is_available(&grants));
        assert!(!SortKey::SoldDesc.is_available(&grants));
        assert_eq!(SortKey::available(&grants).count(), 6);
    }

    #[test]
    fn lister_has_every_key() {
        let grants = Grants::of(Role::Lister);

        assert!(SortKey::ALL.iter().all(|k| k.is_available(&grants)));
        assert_eq!(
            SortKey::available(&grants).collect::<Vec<_>>(),
            SortKey::ALL,
        );
    }

    #[test]
    fn compares_by_key() {
        let cheap = test_listing("1", "5.2");
        let pricey = test_listing("2", "8.5");

        assert_eq!(SortKey::PriceAsc.compare(&cheap, &pricey), Ordering::Less);
        assert_eq!(
            SortKey::PriceDesc.compare(&cheap, &pricey),
            Ordering::Greater,
        );
        assert_eq!(SortKey::Catalog.compare(&cheap, &pricey), Ordering::Equal);
    }
}
