use common::types::ServiceDescriptor;

pub static LISTING_SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "listing-service",
    title: "Listing Service",
    version: env!("CARGO_PKG_VERSION"),
    endpoints: &[
        ("health", "/health"),
        ("create_listing", "POST /listings"),
        ("get_listings", "GET /listings"),
        ("docs", "/openapi.json"),
        ("metrics", "/metrics"),
    ],
};

pub static INQUIRY_SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "inquiry-service",
    title: "Inquiry Service",
    version: env!("CARGO_PKG_VERSION"),
    endpoints: &[
        ("health", "/health"),
        ("create_inquiry", "POST /inquiries"),
        ("get_inquiries", "GET /inquiries"),
        ("docs", "/openapi.json"),
        ("metrics", "/metrics"),
    ],
};
