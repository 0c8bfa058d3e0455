//! Conversion from API pods to display rows
//!
//! Columns follow `kubectl get pods`: READY, STATUS, RESTARTS and AGE.

use crate::models::Pod;
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::{ContainerStatus, Pod as KubePod};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

/// Build the display row for one pod, with ages relative to `now`
pub fn pod_row(pod: &KubePod, namespace: &str, now: DateTime<Utc>) -> Pod {
    let statuses = pod
        .status
        .as_ref()
        .and_then(|status| status.container_statuses.as_deref())
        .unwrap_or(&[]);

    let total = pod
        .spec
        .as_ref()
        .map(|spec| spec.containers.len())
        .unwrap_or(statuses.len());
    let ready = statuses.iter().filter(|container| container.ready).count();
    let restarts: i64 = statuses
        .iter()
        .map(|container| i64::from(container.restart_count))
        .sum();

    Pod {
        namespace: namespace.to_string(),
        name: pod.metadata.name.clone().unwrap_or_default(),
        ready: u32::try_from(ready).unwrap_or(u32::MAX),
        total: u32::try_from(total).unwrap_or(u32::MAX),
        status: pod_status(pod),
        restarts: restarts.to_string(),
        age: human_age(pod.metadata.creation_timestamp.as_ref(), now),
    }
}

/// Status label: Terminating, a container reason, the pod reason, or the phase
pub fn pod_status(pod: &KubePod) -> String {
    if pod.metadata.deletion_timestamp.is_some() {
        return "Terminating".to_string();
    }

    let Some(status) = pod.status.as_ref() else {
        return "Unknown".to_string();
    };

    status
        .container_statuses
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .find_map(container_reason)
        .or_else(|| status.reason.clone())
        .or_else(|| status.phase.clone())
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn container_reason(container: &ContainerStatus) -> Option<String> {
    let state = container.state.as_ref()?;
    if let Some(reason) = state.waiting.as_ref().and_then(|w| w.reason.clone()) {
        return Some(reason);
    }
    state.terminated.as_ref().and_then(|t| t.reason.clone())
}

/// Age label such as `45s`, `3m`, `2h` or `4d`; `-` when unknown
pub fn human_age(timestamp: Option<&Time>, now: DateTime<Utc>) -> String {
    let Some(created) = timestamp.and_then(parse_time) else {
        return "-".to_string();
    };
    let seconds = (now - created).num_seconds().max(0);
    format_elapsed_seconds(seconds)
}

/// Read an API timestamp through its RFC 3339 wire form
fn parse_time(time: &Time) -> Option<DateTime<Utc>> {
    let value = serde_json::to_value(time).ok()?;
    let text = value.as_str()?;
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn format_elapsed_seconds(seconds: i64) -> String {
    if seconds >= 86_400 {
        return format!("{}d", seconds / 86_400);
    }
    if seconds >= 3_600 {
        return format!("{}h", seconds / 3_600);
    }
    if seconds >= 60 {
        return format!("{}m", seconds / 60);
    }
    format!("{}s", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn kube_pod(value: serde_json::Value) -> KubePod {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_running_pod_row() {
        let pod = kube_pod(json!({
            "metadata": {
                "name": "web-1",
                "namespace": "default",
                "creationTimestamp": "2024-05-01T10:30:00Z"
            },
            "spec": {
                "containers": [{"name": "app"}, {"name": "sidecar"}]
            },
            "status": {
                "phase": "Running",
                "containerStatuses": [
                    {"name": "app", "image": "app", "imageID": "", "ready": true, "restartCount": 2,
                     "state": {"running": {}}},
                    {"name": "sidecar", "image": "sc", "imageID": "",
                     "ready": false, "restartCount": 1,
                     "state": {"running": {}}}
                ]
            }
        }));

        let row = pod_row(&pod, "default", now());
        assert_eq!(row.name, "web-1");
        assert_eq!(row.namespace, "default");
        assert_eq!(row.ready_label(), "1/2");
        assert_eq!(row.status, "Running");
        assert_eq!(row.restarts, "3");
        assert_eq!(row.age, "1h");
    }

    #[test]
    fn test_waiting_reason_wins_over_phase() {
        let pod = kube_pod(json!({
            "metadata": {"name": "crashy"},
            "spec": {"containers": [{"name": "app"}]},
            "status": {
                "phase": "Running",
                "containerStatuses": [
                    {"name": "app", "image": "app", "imageID": "",
                     "ready": false, "restartCount": 7,
                     "state": {"waiting": {"reason": "CrashLoopBackOff"}}}
                ]
            }
        }));
        assert_eq!(pod_status(&pod), "CrashLoopBackOff");
    }

    #[test]
    fn test_terminated_reason() {
        let pod = kube_pod(json!({
            "metadata": {"name": "job"},
            "spec": {"containers": [{"name": "app"}]},
            "status": {
                "phase": "Succeeded",
                "containerStatuses": [
                    {"name": "app", "image": "app", "imageID": "",
                     "ready": false, "restartCount": 0,
                     "state": {"terminated": {"exitCode": 0, "reason": "Completed"}}}
                ]
            }
        }));
        assert_eq!(pod_status(&pod), "Completed");
    }

    #[test]
    fn test_pod_reason_before_phase() {
        let pod = kube_pod(json!({
            "metadata": {"name": "evicted"},
            "status": {"phase": "Failed", "reason": "Evicted"}
        }));
        assert_eq!(pod_status(&pod), "Evicted");
    }

    #[test]
    fn test_terminating_pod() {
        let pod = kube_pod(json!({
            "metadata": {"name": "old", "deletionTimestamp": "2024-05-01T11:59:00Z"},
            "status": {"phase": "Running"}
        }));
        assert_eq!(pod_status(&pod), "Terminating");
    }

    #[test]
    fn test_pod_without_status() {
        let pod = kube_pod(json!({
            "metadata": {"name": "new"},
            "spec": {"containers": [{"name": "app"}]}
        }));
        let row = pod_row(&pod, "default", now());
        assert_eq!(row.status, "Unknown");
        assert_eq!(row.ready_label(), "0/1");
        assert_eq!(row.restarts, "0");
        assert_eq!(row.age, "-");
    }

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed_seconds(0), "0s");
        assert_eq!(format_elapsed_seconds(59), "59s");
        assert_eq!(format_elapsed_seconds(60), "1m");
        assert_eq!(format_elapsed_seconds(3_599), "59m");
        assert_eq!(format_elapsed_seconds(3_600), "1h");
        assert_eq!(format_elapsed_seconds(86_400 * 3 + 5), "3d");
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        let pod = kube_pod(json!({
            "metadata": {"name": "skewed", "creationTimestamp": "2024-05-01T12:00:30Z"}
        }));
        assert_eq!(pod_row(&pod, "default", now()).age, "0s");
    }
}
