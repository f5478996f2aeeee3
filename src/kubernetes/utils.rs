use k8s_openapi::jiff::Timestamp;
use kube::ResourceExt;
use kube::api::DynamicObject;

/// Gets [`DynamicObject`]'s UID.
pub fn get_object_uid(object: &DynamicObject) -> String {
    object.uid().unwrap_or_else(|| {
        format!(
            "_{}{}_",
            object.name_any(),
            object.metadata.namespace.as_deref().unwrap_or_default()
        )
    })
}

/// Formats kubernetes timestamp to a human-readable age string.
pub fn format_timestamp(time: &Timestamp) -> String {
    let elapsed = (Timestamp::now().as_second() - time.as_second()).max(0);
    let days = elapsed / 86_400;
    let hours = (elapsed % 86_400) / 3_600;
    let minutes = (elapsed % 3_600) / 60;
    let secs = elapsed % 60;

    if days > 0 {
        format!("{days}d{hours:0>2}h")
    } else if hours > 0 {
        format!("{hours}h{minutes:0>2}m")
    } else if minutes > 0 {
        format!("{minutes}m{secs:0>2}s")
    } else {
        format!("{secs}s")
    }
}
