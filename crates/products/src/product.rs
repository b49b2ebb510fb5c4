use serde::{Deserialize, Serialize};

use mediashop_core::ValueObject;

/// Subscription-like entitlement sold as a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    Book,
    Video,
    Premium,
}

impl Membership {
    /// Stable, lowercase name of the membership kind (used in logs).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Membership::Book => "book",
            Membership::Video => "video",
            Membership::Premium => "premium",
        }
    }
}

impl ValueObject for Membership {}

/// Tangible good that ends up on a shipping slip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PhysicalProduct {
    Book { title: String },
    Video { title: String },
}

impl PhysicalProduct {
    pub fn book(title: impl Into<String>) -> Self {
        Self::Book {
            title: title.into(),
        }
    }

    pub fn video(title: impl Into<String>) -> Self {
        Self::Video {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PhysicalProduct::Book { title } | PhysicalProduct::Video { title } => title,
        }
    }
}

impl ValueObject for PhysicalProduct {}

/// A purchase order line item.
///
/// Exactly one of membership or physical product; the enum makes "both" and
/// "neither" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    Membership(Membership),
    Physical(PhysicalProduct),
}

impl Product {
    pub fn book(title: impl Into<String>) -> Self {
        Self::Physical(PhysicalProduct::book(title))
    }

    pub fn video(title: impl Into<String>) -> Self {
        Self::Physical(PhysicalProduct::video(title))
    }

    pub fn book_membership() -> Self {
        Self::Membership(Membership::Book)
    }

    pub fn video_membership() -> Self {
        Self::Membership(Membership::Video)
    }

    pub fn premium_membership() -> Self {
        Self::Membership(Membership::Premium)
    }

    pub fn is_membership(&self) -> bool {
        matches!(self, Product::Membership(_))
    }

    pub fn is_physical(&self) -> bool {
        matches!(self, Product::Physical(_))
    }

    pub fn as_membership(&self) -> Option<&Membership> {
        match self {
            Product::Membership(m) => Some(m),
            Product::Physical(_) => None,
        }
    }

    pub fn as_physical(&self) -> Option<&PhysicalProduct> {
        match self {
            Product::Physical(p) => Some(p),
            Product::Membership(_) => None,
        }
    }
}

impl ValueObject for Product {}

impl From<Membership> for Product {
    fn from(value: Membership) -> Self {
        Self::Membership(value)
    }
}

impl From<PhysicalProduct> for Product {
    fn from(value: PhysicalProduct) -> Self {
        Self::Physical(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_line_items_are_not_physical() {
        for product in [
            Product::book_membership(),
            Product::video_membership(),
            Product::premium_membership(),
        ] {
            assert!(product.is_membership());
            assert!(!product.is_physical());
            assert!(product.as_physical().is_none());
        }
    }

    #[test]
    fn physical_line_items_carry_their_title() {
        let book = Product::book("A Brief History of Time");
        assert!(book.is_physical());
        assert!(!book.is_membership());
        assert_eq!(
            book.as_physical().map(PhysicalProduct::title),
            Some("A Brief History of Time")
        );

        let video = PhysicalProduct::video("Gone with the Wind");
        assert_eq!(video.title(), "Gone with the Wind");
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(Membership::Book.kind_name(), "book");
        assert_eq!(Membership::Video.kind_name(), "video");
        assert_eq!(Membership::Premium.kind_name(), "premium");
    }

    #[test]
    fn line_items_deserialize_from_order_documents() {
        let json = r#"[
            {"physical": {"kind": "book", "title": "A Brief History of Time"}},
            {"membership": "premium"}
        ]"#;
        let items: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(
            items,
            vec![
                Product::book("A Brief History of Time"),
                Product::premium_membership()
            ]
        );
    }

    #[test]
    fn unknown_membership_kind_is_rejected_at_the_boundary() {
        let err = serde_json::from_str::<Product>(r#"{"membership": "gold"}"#);
        assert!(err.is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_product() -> impl Strategy<Value = Product> {
            prop_oneof![
                Just(Product::book_membership()),
                Just(Product::video_membership()),
                Just(Product::premium_membership()),
                "[A-Za-z][A-Za-z0-9 ]{0,40}".prop_map(Product::book),
                "[A-Za-z][A-Za-z0-9 ]{0,40}".prop_map(Product::video),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every line item is exactly one of membership or physical product.
            #[test]
            fn exactly_one_variant(product in any_product()) {
                prop_assert!(product.is_membership() ^ product.is_physical());
                prop_assert_eq!(product.as_membership().is_some(), product.is_membership());
                prop_assert_eq!(product.as_physical().is_some(), product.is_physical());
            }
        }
    }
}
