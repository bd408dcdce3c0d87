//! Places the bundled `artemis` client can be run from.

use std::path::{Path, PathBuf};

use crate::{DeployableClient, ProcessExecutor};

/// The admin client shipped inside a broker pod, reached with `kubectl exec`.
#[derive(Debug, Clone)]
pub struct BundledClientDeployment {
    namespace: String,
    pod: String,
    container: Option<String>,
    kubectl: String,
    executable_home: PathBuf,
    executor: ProcessExecutor,
}

impl BundledClientDeployment {
    pub fn new(
        kubectl: impl Into<String>,
        namespace: impl Into<String>,
        pod: impl Into<String>,
        executable_home: impl Into<PathBuf>,
    ) -> Self {
        let mut deployment = Self {
            namespace: namespace.into(),
            pod: pod.into(),
            container: None,
            kubectl: kubectl.into(),
            executable_home: executable_home.into(),
            executor: ProcessExecutor::new(),
        };
        deployment.rebuild_executor();
        deployment
    }

    /// Target one container of a multi-container pod.
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self.rebuild_executor();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn rebuild_executor(&mut self) {
        self.executor = ProcessExecutor::kubectl_exec(
            &self.kubectl,
            &self.namespace,
            &self.pod,
            self.container.as_deref(),
        );
    }
}

impl DeployableClient for BundledClientDeployment {
    type Executor = ProcessExecutor;

    fn executable_home(&self) -> &Path {
        &self.executable_home
    }

    fn executor(&self) -> &ProcessExecutor {
        &self.executor
    }

    fn container_name(&self) -> &str {
        &self.pod
    }
}

/// A broker distribution unpacked on this host.
#[derive(Debug, Clone)]
pub struct LocalDeployment {
    name: String,
    executable_home: PathBuf,
    executor: ProcessExecutor,
}

impl LocalDeployment {
    pub fn new(executable_home: impl Into<PathBuf>) -> Self {
        Self {
            name: "localhost".to_string(),
            executable_home: executable_home.into(),
            executor: ProcessExecutor::new(),
        }
    }
}

impl DeployableClient for LocalDeployment {
    type Executor = ProcessExecutor;

    fn executable_home(&self) -> &Path {
        &self.executable_home
    }

    fn executor(&self) -> &ProcessExecutor {
        &self.executor
    }

    fn container_name(&self) -> &str {
        &self.name
    }
}
