use kube::{
    Api, Client, Config,
    api::{ApiResource, DynamicObject},
    config::Kubeconfig,
};
use std::ops::Deref;
use std::path::PathBuf;

use crate::kubernetes::NamespaceSelector;

/// Possible errors from building kubernetes client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Failed to determine users home directory.
    #[error("failed to determine users home directory")]
    HomeDirNotFound,

    /// Failed to process kube configuration.
    #[error("failed to process kube configuration")]
    KubeconfigError(#[from] kube::config::KubeconfigError),

    /// Failed to build kubernetes client.
    #[error("failed to build kubernetes client")]
    KubeError(#[from] kube::Error),
}

/// Wrapper for the kubernetes [`Client`].
pub struct KubernetesClient {
    /// Kubernetes client.
    client: Client,

    /// Context used by the kubernetes client.
    context: String,

    /// Kubernetes API version that the client is connected to.
    k8s_version: String,
}

impl KubernetesClient {
    /// Creates new [`KubernetesClient`] instance.
    pub async fn new(kube_config_path: Option<&str>, kube_context: Option<&str>) -> Result<Self, ClientError> {
        let (client, context) = get_client(kube_config_path, kube_context).await?;
        let k8s_version = client.apiserver_version().await?.git_version.to_owned();

        Ok(Self {
            client,
            context,
            k8s_version,
        })
    }

    /// Returns [`Api`] for the currently held kubernetes client,
    /// scoped to the provided namespace selection.
    pub fn get_api(&self, ar: &ApiResource, selector: &NamespaceSelector) -> Api<DynamicObject> {
        match selector.as_single() {
            Some(namespace) => Api::namespaced_with(self.client.clone(), namespace, ar),
            None => Api::all_with(self.client.clone(), ar),
        }
    }

    /// Returns kube context name for the currently held kubernetes client.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns kubernetes API version.
    pub fn k8s_version(&self) -> &str {
        &self.k8s_version
    }
}

impl Deref for KubernetesClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

/// Creates kubernetes client and returns it together with used context.
async fn get_client(kube_config_path: Option<&str>, kube_context: Option<&str>) -> Result<(Client, String), ClientError> {
    match kube_context {
        Some(ctx) => Ok((get_client_for_context(kube_config_path, ctx).await?, ctx.to_owned())),
        None => Ok((
            Client::try_default().await?,
            get_kube_config(kube_config_path)?.current_context.unwrap_or_default(),
        )),
    }
}

/// Creates kubernetes client for the provided context.
async fn get_client_for_context(kube_config_path: Option<&str>, kube_context: &str) -> Result<Client, ClientError> {
    let kube_config = get_kube_config(kube_config_path)?;
    let kube_config_options = kube::config::KubeConfigOptions {
        context: Some(String::from(kube_context)),
        user: None,
        cluster: None,
    };
    let config = Config::from_custom_kubeconfig(kube_config, &kube_config_options).await?;

    Ok(Client::try_from(config)?)
}

/// Returns kube config read from the provided path or from the default location.
fn get_kube_config(kube_config_path: Option<&str>) -> Result<Kubeconfig, ClientError> {
    let path = match kube_config_path {
        Some(path) => PathBuf::from(path),
        None => {
            let mut path = std::env::home_dir().ok_or(ClientError::HomeDirNotFound)?;
            path.push(".kube/config");
            path
        },
    };

    Ok(Kubeconfig::read_from(path)?)
}
