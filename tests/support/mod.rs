// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing setup and a scripted in-memory cluster.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use autocd::cluster::{ClusterApi, ClusterError};
use autocd::config::AppSpec;
use autocd::resources::{Resource, ResourceHandle};
use autocd::types::{ResourceKind, ResourceName};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("autocd=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[allow(dead_code)]
pub fn app_spec(public: bool) -> AppSpec {
    AppSpec {
        namespace: ResourceName::new("team-x").unwrap(),
        name: ResourceName::new("checkout").unwrap(),
        image: "registry.example.com/team-x/checkout".to_string(),
        container_port: 8080,
        service_port: 80,
        termination_grace_period: Duration::from_secs(60),
        host: "checkout-team-x.cloudiety.de".to_string(),
        publicly_accessible: public,
    }
}

#[allow(dead_code)]
pub fn still_deleting(what: &str) -> ClusterError {
    ClusterError::api(
        409,
        "AlreadyExists",
        format!("object is being deleted: {what} already exists"),
    )
}

#[allow(dead_code)]
pub fn already_exists(what: &str) -> ClusterError {
    ClusterError::api(409, "AlreadyExists", format!("{what} already exists"))
}

/// One call the reconciler made, in order.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(ResourceKind, String),
    Delete(ResourceKind, String),
}

#[allow(dead_code)]
impl Call {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Call::Create(kind, _) | Call::Delete(kind, _) => *kind,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Call::Delete(..))
    }
}

#[allow(dead_code)]
#[derive(Default)]
struct State {
    objects: HashSet<(ResourceKind, String)>,
    calls: Vec<Call>,
    create_errors: HashMap<ResourceKind, VecDeque<ClusterError>>,
    delete_errors: HashMap<ResourceKind, VecDeque<ClusterError>>,
}

/// In-memory cluster. Objects are keyed by kind and name; scripted errors are
/// returned in order before the call falls through to normal behavior.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeCluster {
    state: Mutex<State>,
}

#[allow(dead_code)]
impl FakeCluster {
    pub fn new() -> Self {
        FakeCluster::default()
    }

    /// Pretend the object already exists.
    pub fn seed(&self, kind: ResourceKind, name: &str) {
        let mut state = self.state.lock().unwrap();
        state.objects.insert((kind, name.to_string()));
    }

    pub fn fail_create(&self, kind: ResourceKind, error: ClusterError) {
        let mut state = self.state.lock().unwrap();
        state.create_errors.entry(kind).or_default().push_back(error);
    }

    pub fn fail_delete(&self, kind: ResourceKind, error: ClusterError) {
        let mut state = self.state.lock().unwrap();
        state.delete_errors.entry(kind).or_default().push_back(error);
    }

    pub fn exists(&self, kind: ResourceKind, name: &str) -> bool {
        let state = self.state.lock().unwrap();
        state.objects.contains(&(kind, name.to_string()))
    }

    pub fn object_count(&self) -> usize {
        self.state.lock().unwrap().objects.len()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }
}

#[async_trait]
impl ClusterApi for FakeCluster {
    async fn create(&self, resource: &Resource) -> Result<(), ClusterError> {
        let handle = resource.handle();
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(Call::Create(handle.kind, handle.name.clone()));

        if let Some(error) = state
            .create_errors
            .get_mut(&handle.kind)
            .and_then(VecDeque::pop_front)
        {
            return Err(error);
        }

        let key = (handle.kind, handle.name.clone());
        if state.objects.contains(&key) {
            return Err(already_exists(&handle.to_string()));
        }
        state.objects.insert(key);
        Ok(())
    }

    async fn delete(&self, handle: &ResourceHandle) -> Result<(), ClusterError> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(Call::Delete(handle.kind, handle.name.clone()));

        if let Some(error) = state
            .delete_errors
            .get_mut(&handle.kind)
            .and_then(VecDeque::pop_front)
        {
            return Err(error);
        }

        if state.objects.remove(&(handle.kind, handle.name.clone())) {
            Ok(())
        } else {
            Err(ClusterError::api(
                404,
                "NotFound",
                format!("{handle} not found"),
            ))
        }
    }
}
