use serde::Serialize;

#[derive(Serialize)]
pub struct ViewInfo {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub description: &'static str,
}

// The navigable views and their explanatory copy, served so clients can show
// the right blurb next to each rendering
pub const VIEWS: &[ViewInfo] = &[
    ViewInfo {
        name: "Overview",
        endpoint: "/v1/areas",
        description: "Lebanon's tourism industry is renowned for its rich history, diverse \
            culture, and stunning landscapes. The country offers a unique blend of historical \
            sites, beautiful coastlines, and vibrant cities. Explore various statistics related \
            to Lebanon's tourism sector across the views below.",
    },
    ViewInfo {
        name: "Bar Chart",
        endpoint: "/v1/charts/existence/{column}",
        description: "Most of the Lebanese cities and villages have hotels (around 70%) but \
            only some have restaurants or cafes (around 45%).",
    },
    ViewInfo {
        name: "Pie Chart",
        endpoint: "/v1/charts/metric-by-area/{metric}",
        description: "The Baabda district accounts for 11% of the total number of restaurants \
            across all districts.",
    },
    ViewInfo {
        name: "Heat Map",
        endpoint: "/v1/charts/heatmap",
        description: "The heatmap reveals interesting patterns across different districts. \
            Baabda District stands out with a higher concentration of both restaurants and \
            cafes. Akkar Governorate has the highest percentage of cafes compared to other \
            regions. Meanwhile, the Mount Lebanon Governorate displays a balanced distribution \
            of restaurants, hotels, and cafes, indicating a well-rounded offering in both \
            dining and accommodation.",
    },
    ViewInfo {
        name: "Histogram",
        endpoint: "/v1/charts/existence/initiatives",
        description: "Most of the cities do not have initiatives and projects to improve the \
            tourism sector, around 88%.",
    },
    ViewInfo {
        name: "Initiatives",
        endpoint: "/v1/charts/existence/initiatives",
        description: "Byblos district has the highest number of initiatives with 10, followed \
            by Mount Lebanon Governorate and Baalbek-Hermel Governorate with 9.",
    },
    ViewInfo {
        name: "Scatter Plot",
        endpoint: "/v1/charts/totals",
        description: "The total number of establishments in each area, summed over \
            restaurants, hotels, and cafes.",
    },
    ViewInfo {
        name: "Filtered Map",
        endpoint: "/v1/map",
        description: "The total number of tourist establishments (restaurants, hotels, and \
            cafes) across various areas. Marker colors indicate the range of the total number \
            of establishments, and the minimum threshold filters out the quieter areas.",
    },
    ViewInfo {
        name: "Tourist Spots",
        endpoint: "/v1/areas/{id}",
        description: "Per-district insights along with recommended tourist spots.",
    },
    ViewInfo {
        name: "Feedback",
        endpoint: "/v1/feedback",
        description: "Share your thoughts on Lebanon's tourism sector. One submission per \
            email address.",
    },
];

#[cfg(test)]
mod test {
    #[test]
    fn catalog_covers_every_view() {
        let names: Vec<_> = super::VIEWS.iter().map(|it| it.name).collect();
        for name in [
            "Overview",
            "Bar Chart",
            "Pie Chart",
            "Heat Map",
            "Histogram",
            "Initiatives",
            "Scatter Plot",
            "Filtered Map",
            "Tourist Spots",
            "Feedback",
        ] {
            assert!(names.contains(&name), "missing view: {name}");
        }
    }
}
