use super::booking::BookingService;

/// Where a catalog card leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogTarget {
    AirCalculator,
    OceanCalculator,
    PalletCalculator,
    Booking(BookingService),
    SupplierPayment,
    Tracking,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub cta: &'static str,
    pub target: CatalogTarget,
}

pub fn service_catalog() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            title: "Air freight",
            icon: "✈️",
            summary: "Consolidated air cargo from China, Turkey, France, Dubai and the US to Lomé.",
            highlights: &["Billed per half kilogram", "Normal or express service", "Pickup at the Lomé agency"],
            cta: "Estimate air freight",
            target: CatalogTarget::AirCalculator,
        },
        ServiceOffering {
            title: "Ocean consolidation",
            icon: "🚢",
            summary: "Share a container with other shippers and pay only for the volume you use.",
            highlights: &["Priced per cubic meter", "Lower rate from 1 m³", "Weekly departures"],
            cta: "Estimate ocean freight",
            target: CatalogTarget::OceanCalculator,
        },
        ServiceOffering {
            title: "Pallet shipping",
            icon: "📦",
            summary: "Port-to-port pallet fares between Europe, Asia and West Africa.",
            highlights: &["Published lane rates", "Euro, industrial and oversized pallets", "Prices in XOF, EUR and USD"],
            cta: "Calculate a pallet fare",
            target: CatalogTarget::PalletCalculator,
        },
        ServiceOffering {
            title: "Passenger crossing",
            icon: "🛳️",
            summary: "Seats on our coastal passenger service between Lomé, Cotonou and Lagos.",
            highlights: &["Up to 9 passengers per booking", "Luggage allowance included"],
            cta: "Request a crossing",
            target: CatalogTarget::Booking(BookingService::PassengerCrossing),
        },
        ServiceOffering {
            title: "Supplier payment",
            icon: "💳",
            summary: "We pay your overseas supplier after a quick identity check.",
            highlights: &["ID and selfie verification", "Payment reference issued instantly"],
            cta: "Start a supplier payment",
            target: CatalogTarget::SupplierPayment,
        },
        ServiceOffering {
            title: "Tracking",
            icon: "📍",
            summary: "Follow your shipment from the origin warehouse to the Lomé agency.",
            highlights: &["Milestones from booking to pickup"],
            cta: "Track a shipment",
            target: CatalogTarget::Tracking,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offer_has_highlights_and_calculators_are_linked() {
        let calculators = [
            CatalogTarget::AirCalculator,
            CatalogTarget::OceanCalculator,
            CatalogTarget::PalletCalculator,
        ];
        let catalog = service_catalog();
        for target in calculators {
            assert!(catalog.iter().any(|offer| offer.target == target));
        }
        assert!(catalog.iter().all(|offer| !offer.highlights.is_empty()));
    }
}
