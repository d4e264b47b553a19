use rust_decimal::Decimal;

/// A predefined donation level offered on the checkout's first step.
///
/// Tiers are static site content: the flow only ever reads them. Prices are
/// stored in minor currency units (paise) to keep the catalog integral.
#[derive(Debug, PartialEq, Eq)]
pub struct DonationTier {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub price_in_minor: u64,
}

impl DonationTier {
    /// Price in major units (rupees).
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_in_minor as i64, 2)
    }
}

/// The ordered tier catalog shown on the tier-selection step.
pub const DONATION_TIERS: &[DonationTier] = &[
    DonationTier {
        id: "shila-danam",
        name: "శిలా దానం",
        description: "ఆలయ పునాదికి ఒక రాయి",
        icon: "🪨",
        price_in_minor: 10_100,
    },
    DonationTier {
        id: "ituka-danam",
        name: "ఇటుక దానం",
        description: "గోడ నిర్మాణానికి ఇటుకలు",
        icon: "🧱",
        price_in_minor: 50_100,
    },
    DonationTier {
        id: "sthambha-danam",
        name: "స్తంభ దానం",
        description: "మండప స్తంభానికి సహాయం",
        icon: "🛕",
        price_in_minor: 111_600,
    },
    DonationTier {
        id: "dwara-danam",
        name: "ద్వార దానం",
        description: "ప్రధాన ద్వార నిర్మాణానికి",
        icon: "🚪",
        price_in_minor: 250_100,
    },
    DonationTier {
        id: "gopura-danam",
        name: "గోపుర దానం",
        description: "గోపుర నిర్మాణానికి విరాళం",
        icon: "🙏",
        price_in_minor: 511_600,
    },
    DonationTier {
        id: "garbhagudi-danam",
        name: "గర్భగుడి దానం",
        description: "గర్భగుడి నిర్మాణానికి పూర్ణ సహాయం",
        icon: "🕉️",
        price_in_minor: 1_111_100,
    },
];

/// Looks up a tier by id.
pub fn find(id: &str) -> Option<&'static DonationTier> {
    DONATION_TIERS.iter().find(|tier| tier.id == id)
}
