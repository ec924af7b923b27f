// ABOUTME: Pure transformation from an AppSpec to the desired resource set.
// ABOUTME: Builds Namespace, Deployment, Service and the optional Ingress.

use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, LocalObjectReference, Namespace, PodSpec, PodTemplateSpec, Service,
    ServicePort, ServiceSpec,
};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use super::DesiredResourceSet;
use super::naming::{APP_LABEL, GitlabNaming, NAME_LABEL, NamingStrategy, ResourceNames};
use crate::config::AppSpec;

const CONTAINER_PORT_NAME: &str = "http";
const SERVICE_PORT_NAME: &str = "web";
const INGRESS_PATH: &str = "/";
const INGRESS_PATH_TYPE: &str = "ImplementationSpecific";

/// Builds desired resource sets using a naming strategy.
///
/// `build` never touches the cluster and cannot fail; inputs are validated
/// when the [`AppSpec`] is resolved.
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder<N = GitlabNaming> {
    naming: N,
}

impl ResourceBuilder<GitlabNaming> {
    pub fn new() -> Self {
        ResourceBuilder::default()
    }
}

impl<N: NamingStrategy> ResourceBuilder<N> {
    pub fn with_naming(naming: N) -> Self {
        ResourceBuilder { naming }
    }

    pub fn naming(&self) -> &N {
        &self.naming
    }

    pub fn build(&self, spec: &AppSpec) -> DesiredResourceSet {
        let names = self.naming.names(&spec.namespace, &spec.name);

        DesiredResourceSet {
            namespace: namespace(&names),
            deployment: deployment(spec, &names),
            service: service(spec, &names),
            ingress: spec.publicly_accessible.then(|| ingress(spec, &names)),
        }
    }
}

fn namespaced_meta(names: &ResourceNames, name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(names.namespace.clone()),
        ..Default::default()
    }
}

fn selector_labels(names: &ResourceNames) -> BTreeMap<String, String> {
    BTreeMap::from([(APP_LABEL.to_string(), names.app_label.clone())])
}

fn namespace(names: &ResourceNames) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(names.namespace.clone()),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn deployment(spec: &AppSpec, names: &ResourceNames) -> Deployment {
    let labels = selector_labels(names);

    let mut pod_labels = labels.clone();
    pod_labels.insert(NAME_LABEL.to_string(), names.app.clone());

    let container = Container {
        name: names.container.clone(),
        image: Some(spec.image.clone()),
        ports: Some(vec![ContainerPort {
            container_port: i32::from(spec.container_port),
            name: Some(CONTAINER_PORT_NAME.to_string()),
            ..Default::default()
        }]),
        ..Default::default()
    };

    let image_pull_secrets = names.pull_secret.as_ref().map(|secret| {
        vec![LocalObjectReference {
            name: secret.clone(),
        }]
    });

    Deployment {
        metadata: ObjectMeta {
            labels: Some(labels.clone()),
            ..namespaced_meta(names, &names.deployment)
        },
        spec: Some(DeploymentSpec {
            replicas: Some(1),
            selector: LabelSelector {
                match_labels: Some(labels),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(pod_labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    termination_grace_period_seconds: Some(spec.termination_grace_period_seconds()),
                    containers: vec![container],
                    image_pull_secrets,
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn service(spec: &AppSpec, names: &ResourceNames) -> Service {
    Service {
        metadata: namespaced_meta(names, &names.service),
        spec: Some(ServiceSpec {
            selector: Some(selector_labels(names)),
            ports: Some(vec![ServicePort {
                name: Some(SERVICE_PORT_NAME.to_string()),
                port: i32::from(spec.service_port),
                target_port: Some(IntOrString::Int(i32::from(spec.container_port))),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn ingress(spec: &AppSpec, names: &ResourceNames) -> Ingress {
    let backend = IngressBackend {
        service: Some(IngressServiceBackend {
            name: names.service.clone(),
            port: Some(ServiceBackendPort {
                number: Some(i32::from(spec.service_port)),
                ..Default::default()
            }),
        }),
        ..Default::default()
    };

    Ingress {
        metadata: namespaced_meta(names, &names.ingress),
        spec: Some(IngressSpec {
            rules: Some(vec![IngressRule {
                host: Some(spec.host.clone()),
                http: Some(HTTPIngressRuleValue {
                    paths: vec![HTTPIngressPath {
                        path: Some(INGRESS_PATH.to_string()),
                        path_type: INGRESS_PATH_TYPE.to_string(),
                        backend,
                    }],
                }),
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
