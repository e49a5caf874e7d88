use std::sync::Arc;

use tracing::{debug, instrument};

use synckit::{guard, Access, ResourceClient, ResourceController, Role, SessionProvider};

use crate::contract::model::{Product, User};
use crate::domain::draft::{ProductDraft, UserDraft};

/// The admin panel: product and user rosters behind an access gate.
///
/// Mounting checks the stored credential first; without an admin
/// credential nothing is fetched and the caller redirects to the public
/// entry point. With one, both collections are fetched concurrently and
/// each resolves its own store independently. A failed fetch is
/// non-fatal and leaves that store empty with its indicator set.
///
/// User editing has full remote parity with products: a user save goes
/// through the users client like a product save goes through the
/// products client.
pub struct AdminPanel<P, U>
where
    P: ResourceClient<Product, Draft = ProductDraft>,
    U: ResourceClient<User, Draft = UserDraft>,
{
    products: ResourceController<Product, P>,
    users: ResourceController<User, U>,
}

impl<P, U> AdminPanel<P, U>
where
    P: ResourceClient<Product, Draft = ProductDraft>,
    U: ResourceClient<User, Draft = UserDraft>,
{
    pub fn new(products: Arc<P>, users: Arc<U>) -> Self {
        Self {
            products: ResourceController::new(products),
            users: ResourceController::new(users),
        }
    }

    /// Gate on the stored credential, then load both rosters. The guard
    /// runs exactly once, synchronously, before any fetch is issued.
    #[instrument(skip_all)]
    pub async fn mount(&mut self, session: &dyn SessionProvider) -> Access {
        match guard(session, Role::Admin) {
            Access::Redirect => {
                debug!("no admin credential, redirecting without fetching");
                Access::Redirect
            }
            Access::Granted(cred) => {
                let (products, users) = (&mut self.products, &mut self.users);
                // Fetch failures are already recorded on each controller
                // as non-fatal indicators; the panel still mounts.
                let _ = tokio::join!(products.refresh(), users.refresh());
                Access::Granted(cred)
            }
        }
    }

    pub fn products(&self) -> &ResourceController<Product, P> {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut ResourceController<Product, P> {
        &mut self.products
    }

    pub fn users(&self) -> &ResourceController<User, U> {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut ResourceController<User, U> {
        &mut self.users
    }
}
