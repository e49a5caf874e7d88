//! Headless FarmaThony client: drives the storefront catalog and the
//! admin panel against a configured backend, standing in for the web
//! chrome during development and support work.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use pharmacy::{
    AdminPanel, CatalogView, FileSession, HttpResource, Product, ProductField, RestClient, User,
    UserField,
};
use runtime::{init_logging, AppConfig};
use synckit::{Access, Credential, Role};

/// FarmaThony pharmacy client
#[derive(Parser)]
#[command(name = "farmathony")]
#[command(about = "FarmaThony pharmacy client", version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "farmathony.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a session credential
    Login {
        #[arg(long)]
        token: String,
        #[arg(long, value_enum, default_value_t = RoleArg::Customer)]
        role: RoleArg,
    },
    /// Drop the stored credential
    Logout,
    /// Check the configuration and exit
    Check,
    /// Browse the storefront catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCmd,
    },
    /// Admin panel operations (requires an admin credential)
    Admin {
        #[command(subcommand)]
        command: AdminCmd,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Admin,
    Customer,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::Customer => Role::Customer,
        }
    }
}

#[derive(Subcommand)]
enum CatalogCmd {
    /// List products, optionally filtered by a search query
    List {
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminCmd {
    Products {
        #[command(subcommand)]
        command: ProductCmd,
    },
    Users {
        #[command(subcommand)]
        command: UserCmd,
    },
}

#[derive(Subcommand)]
enum ProductCmd {
    /// List the product roster
    List,
    /// Create a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Edit an existing product
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a product
    Rm { id: u64 },
}

#[derive(Subcommand)]
enum UserCmd {
    /// List the user roster
    List,
    /// Edit an existing user
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user
    Rm { id: u64 },
}

type HttpAdminPanel = AdminPanel<HttpResource<Product>, HttpResource<User>>;

fn rest_client(config: &AppConfig) -> Result<RestClient> {
    Ok(RestClient::new(config.base_url()?, config.timeout())?)
}

/// Mount the admin panel behind the session guard; a redirect outcome
/// becomes a hard refusal here since there is nowhere to redirect to.
async fn mount_admin(config: &AppConfig) -> Result<HttpAdminPanel> {
    let rest = rest_client(config)?;
    let session = FileSession::new(config.session_path());
    let mut panel = AdminPanel::new(
        Arc::new(rest.resource::<Product>()),
        Arc::new(rest.resource::<User>()),
    );
    match panel.mount(&session).await {
        Access::Granted(_) => Ok(panel),
        Access::Redirect => bail!("not authorized: log in with an admin credential first"),
    }
}

fn print_products(items: &[Product]) {
    for p in items {
        println!("{:>5}  {:<28} {:>9.2}  {}", p.id, p.name, p.price, p.description);
    }
    println!("{} product(s)", items.len());
}

fn print_users(items: &[User]) {
    for u in items {
        println!("{:>5}  {:<24} {}", u.id, u.name, u.email);
    }
    println!("{} user(s)", items.len());
}

async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Commands::Login { token, role } => {
            let session = FileSession::new(config.session_path());
            session.save(&Credential {
                token,
                role: role.into(),
            })?;
            println!("session stored at {}", config.session_path().display());
        }
        Commands::Logout => {
            FileSession::new(config.session_path()).clear()?;
            println!("session cleared");
        }
        Commands::Check => {
            println!("api.base_url: {}", config.base_url()?);
            println!("timeout: {:?}", config.timeout());
            println!("session file: {}", config.session_path().display());
        }
        Commands::Catalog {
            command: CatalogCmd::List { search },
        } => {
            let rest = rest_client(&config)?;
            let mut catalog = CatalogView::new(Arc::new(rest.resource::<Product>()));
            catalog.refresh().await?;
            if let Some(query) = search {
                catalog.set_query(query);
            }
            for p in catalog.visible() {
                println!("{:>5}  {:<28} {:>9.2}", p.id, p.name, p.price);
            }
        }
        Commands::Admin { command } => {
            let mut panel = mount_admin(&config).await?;
            match command {
                AdminCmd::Products { command } => {
                    let products = panel.products_mut();
                    match command {
                        ProductCmd::List => print_products(products.items()),
                        ProductCmd::Add {
                            name,
                            price,
                            description,
                            image,
                        } => {
                            products.open_for_create();
                            products.update_field(ProductField::Name(name));
                            products.update_field(ProductField::Price(price));
                            products.update_field(ProductField::Description(description));
                            products.update_field(ProductField::Image(image));
                            products.submit().await?;
                            print_products(products.items());
                        }
                        ProductCmd::Edit {
                            id,
                            name,
                            price,
                            description,
                            image,
                        } => {
                            if !products.open_for_edit(id) {
                                bail!("no product with id {id}");
                            }
                            if let Some(v) = name {
                                products.update_field(ProductField::Name(v));
                            }
                            if let Some(v) = price {
                                products.update_field(ProductField::Price(v));
                            }
                            if let Some(v) = description {
                                products.update_field(ProductField::Description(v));
                            }
                            if let Some(v) = image {
                                products.update_field(ProductField::Image(v));
                            }
                            products.submit().await?;
                            print_products(products.items());
                        }
                        ProductCmd::Rm { id } => {
                            products.remove(id).await?;
                            print_products(products.items());
                        }
                    }
                }
                AdminCmd::Users { command } => {
                    let users = panel.users_mut();
                    match command {
                        UserCmd::List => print_users(users.items()),
                        UserCmd::Edit { id, name, email } => {
                            if !users.open_for_edit(id) {
                                bail!("no user with id {id}");
                            }
                            if let Some(v) = name {
                                users.update_field(UserField::Name(v));
                            }
                            if let Some(v) = email {
                                users.update_field(UserField::Email(v));
                            }
                            users.submit().await?;
                            print_users(users.items());
                        }
                        UserCmd::Rm { id } => {
                            users.remove(id).await?;
                            print_users(users.items());
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_layered(&cli.config)?;
    init_logging(config.logging.as_ref())?;
    debug!(config = %cli.config.display(), "configuration loaded");
    run(cli, config).await
}
