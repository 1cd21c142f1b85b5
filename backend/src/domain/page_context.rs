//! Typed page-data scopes for the rendering layer.
//!
//! A route loader produces one immutable page-data snapshot. Views that
//! render that page read it through an accessor such as [`use_order`]
//! instead of receiving it through every intermediate function.
//!
//! The binding is explicit: a [`Scope`] value is threaded through view
//! composition, and a [`Provider`] returns a child scope carrying one more
//! binding. Dropping the child scope (leaving the subtree) leaves the parent
//! unbound again.
//!
//! Asking for data that no enclosing provider bound is a composition bug and
//! fails with [`MissingProviderError`], never with a default value. Binding
//! the same kind twice is allowed; the inner binding shadows the outer one
//! for everything rendered beneath it.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::{AnalyticsSummary, CategoryDetails, OrderDetails, OrderList, SupplierDetails};

/// A kind of page data that can be bound in a [`Scope`].
pub trait ContextKind: 'static {
    /// Snapshot type bound by this kind's provider.
    type Data: Send + Sync + 'static;
    /// Accessor name reported in [`MissingProviderError`].
    const ACCESSOR: &'static str;
    /// Provider name reported in [`MissingProviderError`].
    const PROVIDER: &'static str;
}

/// An accessor ran in a scope with no matching provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{accessor} must be used within {provider}")]
pub struct MissingProviderError {
    accessor: &'static str,
    provider: &'static str,
}

impl MissingProviderError {
    /// Error for context kind `K`.
    #[must_use]
    pub fn of<K: ContextKind>() -> Self {
        Self {
            accessor: K::ACCESSOR,
            provider: K::PROVIDER,
        }
    }

    pub fn accessor(&self) -> &'static str {
        self.accessor
    }

    pub fn provider(&self) -> &'static str {
        self.provider
    }
}

struct Binding {
    kind: TypeId,
    provider: &'static str,
    data: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Binding>>,
}

/// Immutable chain of page-data bindings.
///
/// Cloning is cheap and shares the chain. [`Scope::root`] binds nothing.
#[derive(Clone, Default)]
pub struct Scope {
    head: Option<Arc<Binding>>,
}

impl Scope {
    /// Scope with no bindings.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Child scope with `data` bound for kind `K`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use till::domain::{ContextKind, Scope, use_context};
    ///
    /// struct Greeting;
    /// impl ContextKind for Greeting {
    ///     type Data = String;
    ///     const ACCESSOR: &'static str = "use_greeting";
    ///     const PROVIDER: &'static str = "GreetingProvider";
    /// }
    ///
    /// let data = Arc::new("hello".to_owned());
    /// let scope = Scope::root().provide::<Greeting>(Arc::clone(&data));
    /// let seen = use_context::<Greeting>(&scope).expect("bound");
    /// assert!(Arc::ptr_eq(&seen, &data));
    /// assert!(use_context::<Greeting>(&Scope::root()).is_err());
    /// ```
    #[must_use]
    pub fn provide<K: ContextKind>(&self, data: Arc<K::Data>) -> Self {
        Provider::<K>::new(data).wrap(self)
    }

    /// Whether an enclosing provider bound kind `K`.
    #[must_use]
    pub fn is_bound<K: ContextKind>(&self) -> bool {
        self.bindings().any(|binding| binding.kind == TypeId::of::<K>())
    }

    fn bindings(&self) -> impl Iterator<Item = &Binding> {
        std::iter::successors(self.head.as_deref(), |binding| binding.parent.as_deref())
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.bindings().map(|binding| binding.provider))
            .finish()
    }
}

/// Binds one page-data snapshot for kind `K`.
pub struct Provider<K: ContextKind> {
    data: Arc<K::Data>,
    kind: PhantomData<fn() -> K>,
}

impl<K: ContextKind> Provider<K> {
    pub fn new(data: Arc<K::Data>) -> Self {
        Self {
            data,
            kind: PhantomData,
        }
    }

    /// Scope for the subtree beneath this provider.
    #[must_use]
    pub fn wrap(self, parent: &Scope) -> Scope {
        let data: Arc<dyn Any + Send + Sync> = self.data;
        Scope {
            head: Some(Arc::new(Binding {
                kind: TypeId::of::<K>(),
                provider: K::PROVIDER,
                data,
                parent: parent.head.clone(),
            })),
        }
    }
}

/// Nearest binding of kind `K`, as the exact `Arc` the provider received.
pub fn use_context<K: ContextKind>(scope: &Scope) -> Result<Arc<K::Data>, MissingProviderError> {
    scope
        .bindings()
        .find(|binding| binding.kind == TypeId::of::<K>())
        .and_then(|binding| Arc::clone(&binding.data).downcast::<K::Data>().ok())
        .ok_or_else(MissingProviderError::of::<K>)
}

macro_rules! define_page_context {
    (
        $(#[$meta:meta])*
        $kind:ident: $data:ty => $accessor:ident, $provider:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub enum $kind {}

        impl ContextKind for $kind {
            type Data = $data;
            const ACCESSOR: &'static str = stringify!($accessor);
            const PROVIDER: &'static str = $provider;
        }

        #[doc = concat!("Page data bound by the nearest `", $provider, "`.")]
        pub fn $accessor(scope: &Scope) -> Result<Arc<$data>, MissingProviderError> {
            use_context::<$kind>(scope)
        }
    };
}

define_page_context! {
    /// Analytics summary for the analytics screen.
    AnalyticsContext: AnalyticsSummary => use_analytics, "AnalyticsProvider"
}
define_page_context! {
    /// One category with its products.
    CategoryContext: CategoryDetails => use_category, "CategoryProvider"
}
define_page_context! {
    /// One order with its lines.
    OrderContext: OrderDetails => use_order, "OrderProvider"
}
define_page_context! {
    /// A page of orders.
    OrdersContext: OrderList => use_orders, "OrdersProvider"
}
define_page_context! {
    /// One supplier with its products.
    SupplierContext: SupplierDetails => use_supplier, "SupplierProvider"
}
