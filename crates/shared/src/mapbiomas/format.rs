use crate::models::Alert;

pub const NO_ALERTS_MESSAGE: &str = "Nenhum alerta encontrado no período.";

/// One line per alert, in the order the alerts arrived. Missing location
/// fields render as `?`.
pub fn format_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return NO_ALERTS_MESSAGE.to_string();
    }

    alerts
        .iter()
        .map(|alert| {
            format!(
                "- {}: {} ha em {}/{} ({})",
                alert.date,
                alert.geom_area_ha,
                field_or_placeholder(alert.municipality.as_deref()),
                field_or_placeholder(alert.state.as_deref()),
                field_or_placeholder(alert.biome.as_deref()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn field_or_placeholder(field: Option<&str>) -> &str {
    field.unwrap_or("?")
}
