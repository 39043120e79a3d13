//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod site;

use clap::{Args, Subcommand};

use copyserv_shop::contact::ContactRequest;
use copyserv_shop::search::{FilterSelection, ALL_TAG};

/// Brand and category selectors.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Brand selector (`all`, `ricoh`, `canon`).
    #[arg(short, long, default_value = ALL_TAG)]
    pub brand: String,

    /// Category selector (`all`, `equipo`, `repuesto`, `insumo`).
    #[arg(short = 'C', long, default_value = ALL_TAG)]
    pub category: String,
}

impl FilterArgs {
    /// The selection these flags describe. Unknown values are kept and match nothing.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::from_raw(&self.brand, &self.category)
    }
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products under a filter.
    List(FilterArgs),
    /// Show the image path for a product.
    Path {
        /// Product name, exactly as listed.
        name: String,
    },
    /// Show per-value counts for each facet.
    Facets(FilterArgs),
    /// Print the chat link for a product enquiry.
    Enquire {
        /// Product name, exactly as listed.
        name: String,
    },
}

/// Contact form fields.
#[derive(Args, Debug, Clone, Default)]
pub struct ContactFields {
    /// Full name.
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Phone / WhatsApp number.
    #[arg(short, long, default_value = "")]
    pub phone: String,

    /// Email (optional).
    #[arg(short, long)]
    pub email: Option<String>,

    /// District / location (optional).
    #[arg(short, long)]
    pub location: Option<String>,

    /// Description of the problem.
    #[arg(short, long, default_value = "")]
    pub message: String,
}

impl ContactFields {
    /// Build the request. Blank optional fields count as absent.
    pub fn to_request(&self) -> ContactRequest {
        let mut request = ContactRequest::new(&self.name, &self.phone, &self.message);
        if let Some(email) = &self.email {
            request = request.with_email(email);
        }
        if let Some(location) = &self.location {
            request = request.with_location(location);
        }
        request
    }
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    #[command(subcommand)]
    pub command: ContactCommand,
}

#[derive(Subcommand)]
pub enum ContactCommand {
    /// Validate a contact request and print every error.
    Validate {
        #[command(flatten)]
        fields: ContactFields,

        /// Print the notice as the page would render it.
        #[arg(long)]
        html: bool,
    },
    /// Compose the chat message and link for a contact request.
    Send {
        #[command(flatten)]
        fields: ContactFields,

        /// Prompt for each field.
        #[arg(short, long)]
        interactive: bool,
    },
}

/// Arguments for the site command.
#[derive(Args)]
pub struct SiteArgs {
    #[command(subcommand)]
    pub command: SiteCommand,
}

#[derive(Subcommand)]
pub enum SiteCommand {
    /// Render the landing page to `<out>/index.html`.
    Build {
        /// Output directory (default: `site.output_dir`).
        #[arg(short, long)]
        out: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value in the loaded config file.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Write a default copyserv.toml.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
