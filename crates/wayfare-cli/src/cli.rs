//! Command-line argument definitions using clap.
//!
//! Argument structs carry the clap derives; each converts into the
//! interface-neutral parameter types of `wayfare_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Drafts / Resource API
//! ```

use std::{net::SocketAddr, path::PathBuf};

use clap::{Args, Subcommand};
use wayfare_core::params::{
    DayInput, DeleteResource, DestinationFields, HomeFeature, HomeTile, Id, ListResources,
    PackageFields, RemoveDay,
};

use crate::args::{parse_bind, DEFAULT_BIND};

/// List filters shared by the collection commands.
#[derive(Args)]
pub struct ListArgs {
    /// Only show documents for this destination slug
    #[arg(short, long)]
    pub destination: Option<String>,
    /// Only show packages of this type, e.g. "Luxury" or "Candle Night"
    #[arg(short = 't', long = "type")]
    pub package_type: Option<String>,
    /// Only show documents with exactly this hotel rating
    #[arg(short, long)]
    pub rating: Option<u8>,
}

impl From<ListArgs> for ListResources {
    fn from(val: ListArgs) -> Self {
        ListResources {
            destination: val.destination,
            package_type: val.package_type,
            hotel_rating: val.rating,
        }
    }
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "ID of the document to show")]
    pub id: String,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a document permanently
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "ID of the document to delete")]
    pub id: String,
    /// Only delete when the document belongs to this destination
    #[arg(short, long)]
    pub destination: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl From<DeleteArgs> for DeleteResource {
    fn from(val: DeleteArgs) -> Self {
        DeleteResource {
            id: val.id,
            destination: val.destination,
            confirmed: val.yes,
        }
    }
}

/// Package form fields as flags.
///
/// Shared by `create`, where the required fields are checked by validation,
/// and `update`, where omitted flags keep the stored value.
#[derive(Args, Default)]
pub struct PackageFieldArgs {
    #[arg(long)]
    pub title: Option<String>,
    /// Price as shown on the site, e.g. "₹42,999/-"
    #[arg(long)]
    pub price: Option<String>,
    /// Duration as shown on the site, e.g. "5 Days 7 Nights"
    #[arg(long)]
    pub days: Option<String>,
    /// City or area; defaults to the destination's first city
    #[arg(long)]
    pub location: Option<String>,
    /// Image path, URL or data URI
    #[arg(long)]
    pub image: Option<String>,
    /// Hotel rating (3-5)
    #[arg(long)]
    pub rating: Option<u8>,
    #[arg(short = 't', long = "type")]
    pub package_type: Option<String>,
    /// Feature line; repeat for several
    #[arg(short, long = "feature")]
    pub features: Vec<String>,
    /// Highlights separated by " • "
    #[arg(long)]
    pub highlights: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

impl PackageFieldArgs {
    pub fn into_fields(self, destination: Option<String>) -> PackageFields {
        PackageFields {
            title: self.title,
            destination,
            location: self.location,
            price: self.price,
            days: self.days,
            image: self.image,
            hotel_rating: self.rating,
            package_type: self.package_type,
            features: self.features,
            highlights: self.highlights,
            category: self.category,
        }
    }
}

/// Create a new package
#[derive(Args)]
pub struct CreatePackageArgs {
    /// Destination slug, e.g. "bali"
    pub destination: String,
    #[command(flatten)]
    pub fields: PackageFieldArgs,
    /// Also create a linked itinerary (romantic packages only)
    #[arg(long)]
    pub with_itinerary: bool,
}

/// Update an existing package
#[derive(Args)]
pub struct UpdatePackageArgs {
    #[arg(help = "ID of the package to update")]
    pub id: String,
    /// Move the package to another destination
    #[arg(long)]
    pub destination: Option<String>,
    #[command(flatten)]
    pub fields: PackageFieldArgs,
}

impl From<UpdatePackageArgs> for (Id, PackageFields) {
    fn from(val: UpdatePackageArgs) -> Self {
        (Id { id: val.id }, val.fields.into_fields(val.destination))
    }
}

#[derive(Subcommand)]
pub enum PackageCommands {
    /// List packages
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show details of a package
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Create a new package
    #[command(alias = "c")]
    Create(CreatePackageArgs),
    /// Update an existing package
    #[command(alias = "u")]
    Update(UpdatePackageArgs),
    /// Delete a package permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

/// Create an itinerary from a JSON draft file
#[derive(Args)]
pub struct CreateItineraryArgs {
    /// JSON file with the itinerary fields (camelCase)
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Append a day to an itinerary
#[derive(Args)]
pub struct AddDayArgs {
    #[arg(help = "ID of the itinerary")]
    pub id: String,
    /// Title of the new day
    pub title: String,
    /// Activity; repeat for several
    #[arg(short, long = "activity")]
    pub activities: Vec<String>,
    /// Breakfast, Lunch or Dinner; repeat for several
    #[arg(short, long = "meal")]
    pub meals: Vec<String>,
    #[arg(long)]
    pub accommodation: Option<String>,
}

impl From<AddDayArgs> for (Id, DayInput) {
    fn from(val: AddDayArgs) -> Self {
        (
            Id { id: val.id },
            DayInput {
                title: val.title,
                activities: val.activities,
                meals: val.meals,
                accommodation: val.accommodation,
            },
        )
    }
}

/// Remove a day from an itinerary; later days are renumbered
#[derive(Args)]
pub struct RemoveDayArgs {
    #[arg(help = "ID of the itinerary")]
    pub id: String,
    #[arg(help = "Day number to remove (1 = first day)")]
    pub day: u32,
}

impl From<RemoveDayArgs> for RemoveDay {
    fn from(val: RemoveDayArgs) -> Self {
        RemoveDay {
            id: val.id,
            day: val.day,
        }
    }
}

#[derive(Subcommand)]
pub enum ItineraryCommands {
    /// List itineraries
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show an itinerary day by day
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Create an itinerary from a JSON file
    #[command(alias = "c")]
    Create(CreateItineraryArgs),
    /// Append a day
    AddDay(AddDayArgs),
    /// Remove a day
    RemoveDay(RemoveDayArgs),
    /// Delete an itinerary permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

/// Add a destination
#[derive(Args)]
pub struct AddDestinationArgs {
    /// Display name, e.g. "Sri Lanka"
    pub name: String,
    /// URL slug; derived from the name when omitted
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long)]
    pub tagline: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
}

impl From<AddDestinationArgs> for DestinationFields {
    fn from(val: AddDestinationArgs) -> Self {
        DestinationFields {
            name: val.name,
            slug: val.slug,
            tagline: val.tagline,
            image: val.image,
        }
    }
}

#[derive(Subcommand)]
pub enum DestinationCommands {
    /// List destinations
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a destination
    #[command(alias = "a")]
    Add(AddDestinationArgs),
    /// Delete a destination permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct FeatureArgs {
    /// Destination slug the package is featured under
    pub destination: String,
    #[arg(help = "ID of the package")]
    pub package_id: String,
}

impl From<FeatureArgs> for HomeFeature {
    fn from(val: FeatureArgs) -> Self {
        HomeFeature {
            destination: val.destination,
            package_id: val.package_id,
        }
    }
}

#[derive(Args)]
pub struct AddTileArgs {
    /// Destination slug the tile is shown under
    pub destination: String,
    /// Tile caption
    pub name: String,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub link: Option<String>,
}

impl From<AddTileArgs> for HomeTile {
    fn from(val: AddTileArgs) -> Self {
        HomeTile {
            destination: val.destination,
            name: val.name,
            image: val.image,
            link: val.link,
        }
    }
}

#[derive(Args)]
pub struct RemoveTileArgs {
    pub destination: String,
    #[arg(help = "Tile position to remove (1 = first tile)")]
    pub position: usize,
}

#[derive(Subcommand)]
pub enum HomeCommands {
    /// Show the curated home content
    #[command(alias = "s")]
    Show,
    /// Feature a package under a destination
    Feature(FeatureArgs),
    /// Stop featuring a package
    Unfeature(FeatureArgs),
    /// Add a top-destination tile
    AddTile(AddTileArgs),
    /// Remove a top-destination tile
    RemoveTile(RemoveTileArgs),
}

/// Serve the resource API
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "WAYFARE_BIND", default_value = DEFAULT_BIND, value_parser = parse_bind)]
    pub bind: SocketAddr,
}
