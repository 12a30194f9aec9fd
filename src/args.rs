use clap::Parser;

/// Lookup tool over an electoral dataset: voting assignments, nearest
/// voting centers, candidate browsing and the electoral calendar.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The JSON file containing the electoral dataset (polling
    /// places, tables, electors, parties, candidates, plans, activities,
    /// news and events). See sample_data/ for the expected shape.
    #[clap(short, long, value_parser)]
    pub data: String,

    /// (elector id) If specified, looks up the voting assignment for this
    /// elector: mesa, room, floor, pavilion and polling place.
    #[clap(short, long, value_parser)]
    pub elector: Option<String>,

    /// (decimal degrees) Latitude of the reference point for the nearest
    /// voting center search. Must be given together with --lon.
    #[clap(long, value_parser, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// (decimal degrees) Longitude of the reference point for the nearest
    /// voting center search. Must be given together with --lat.
    #[clap(long, value_parser, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// (party id) If specified, scopes the candidate listing to this party
    /// and also prints the party's plan sections and news.
    #[clap(short, long, value_parser)]
    pub party: Option<String>,

    /// (region name, exact) Region facet for the candidate listing.
    #[clap(long, value_parser)]
    pub region: Option<String>,

    /// (office name or 'all') Role facet for the candidate listing. One of:
    /// president, vice-president, deputy, senator, andean-parliament.
    #[clap(long, value_parser)]
    pub role: Option<String>,

    /// (free text) Query matched against candidate names and regions, and
    /// against party names and short names.
    #[clap(short, long, value_parser)]
    pub query: Option<String>,

    /// (candidate ids, repeatable) Candidate ids toggled into the
    /// comparison selection, in order. At most two are kept; toggling a
    /// third evicts the oldest.
    #[clap(long, value_parser)]
    pub compare: Option<Vec<String>>,

    /// (event type or 'all') If specified, prints the electoral calendar,
    /// narrowed to one of: election, process, poll-worker.
    #[clap(long, value_parser)]
    pub events: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
