// Copyright 2026, The Helios Operator Authors
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for running reconcilers against an in-memory Kubernetes API.

use http::{Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that behaves like a tiny API server.
///
/// GET returns the object stored at the request path or a 404 Status.
/// POST to a collection stores the body under `<collection>/<metadata.name>`
/// and answers 409 if the name is taken. Failures registered with
/// [`MockService::fail`] take precedence over stored objects. Every request
/// is recorded so tests can check what the reconciler did.
#[derive(Clone, Default)]
pub struct MockService {
    objects: Arc<Mutex<HashMap<String, Value>>>,
    failures: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object that GET requests on `path` will return
    pub fn with_object(self, path: &str, object: Value) -> Self {
        self.objects.lock().unwrap().insert(path.to_string(), object);
        self
    }

    /// Answer requests with `method` on `path` with an error Status
    pub fn fail(self, method: &str, path: &str, status: u16, reason: &str) -> Self {
        self.failures.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, status_json(status, reason, "injected failure")),
        );
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    pub fn object(&self, path: &str) -> Option<Value> {
        self.objects.lock().unwrap().get(path).cloned()
    }

    /// Requests that would have changed cluster state
    pub fn mutations(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(method, _)| method != Method::GET.as_str())
            .cloned()
            .collect()
    }

    fn handle(&self, method: &str, path: &str, body: &[u8]) -> (u16, String) {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), path.to_string()));

        if let Some(resp) = self
            .failures
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
        {
            return resp.clone();
        }

        let mut objects = self.objects.lock().unwrap();
        match method {
            "GET" => match objects.get(path) {
                Some(object) => (StatusCode::OK.as_u16(), object.to_string()),
                None => (404, status_json(404, "NotFound", &format!("{} not found", path))),
            },
            "POST" => {
                let object: Value = match serde_json::from_slice(body) {
                    Ok(object) => object,
                    Err(e) => return (400, status_json(400, "BadRequest", &e.to_string())),
                };
                let Some(name) = object["metadata"]["name"].as_str() else {
                    return (422, status_json(422, "Invalid", "metadata.name is required"));
                };
                let key = format!("{}/{}", path, name);
                if objects.contains_key(&key) {
                    return (409, status_json(409, "AlreadyExists", &format!("{} already exists", key)));
                }
                objects.insert(key, object.clone());
                (StatusCode::CREATED.as_u16(), object.to_string())
            }
            _ => (405, status_json(405, "MethodNotAllowed", method)),
        }
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let service = self.clone();

        Box::pin(async move {
            let body = req.into_body().collect().await?.to_bytes();
            let (status, body) = service.handle(&method, &path, &body);

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

pub fn helios_app_path(namespace: &str, name: &str) -> String {
    format!("/apis/heliosapp.helios.dev/v1/namespaces/{}/heliosapps/{}", namespace, name)
}

pub fn deployment_path(namespace: &str, name: &str) -> String {
    format!("/apis/apps/v1/namespaces/{}/deployments/{}", namespace, name)
}

pub fn deployments_path(namespace: &str) -> String {
    format!("/apis/apps/v1/namespaces/{}/deployments", namespace)
}

pub fn service_path(namespace: &str, name: &str) -> String {
    format!("/api/v1/namespaces/{}/services/{}", namespace, name)
}

pub fn services_path(namespace: &str) -> String {
    format!("/api/v1/namespaces/{}/services", namespace)
}

/// Create a HeliosApp JSON object as the API server would return it
pub fn helios_app_json(namespace: &str, name: &str, image: &str, port: i32, replicas: i32) -> Value {
    serde_json::json!({
        "apiVersion": "heliosapp.helios.dev/v1",
        "kind": "HeliosApp",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": format!("{}-uid", name)
        },
        "spec": {
            "gitRepo": format!("https://github.com/example/{}", name),
            "imageRepo": image,
            "port": port,
            "replicas": replicas
        }
    })
}

/// Create a Kubernetes Status error body
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}
