//! Client-selectable regions.

/// A region the user can pick as their own location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRegion {
    pub code: &'static str,
    pub label: &'static str,
}

/// Every region a client can select, in menu order.
pub const CLIENT_REGIONS: &[ClientRegion] = &[
    ClientRegion { code: "us-west", label: "US West" },
    ClientRegion { code: "us-east", label: "US East" },
    ClientRegion { code: "us-south", label: "US South" },
    ClientRegion { code: "us-central", label: "US Central" },
    ClientRegion { code: "us-southeast", label: "US Southeast" },
    ClientRegion { code: "eu-central", label: "EU Central" },
    ClientRegion { code: "eu-west", label: "EU West" },
    ClientRegion { code: "eu-central-east", label: "EU Central-East" },
    ClientRegion { code: "asia-southeast", label: "Asia South-East" },
    ClientRegion { code: "asia-east", label: "Asia East" },
    ClientRegion { code: "asia-south", label: "Asia South" },
];

/// Looks up a client region by exact code.
pub fn find_client_region(code: &str) -> Option<&'static ClientRegion> {
    CLIENT_REGIONS.iter().find(|region| region.code == code)
}

pub fn is_client_region(code: &str) -> bool {
    find_client_region(code).is_some()
}
