//! Hand-written paged routes: one template each, base and filtered variants rendered from it.

use crate::sql::{FilterKind, FilterOp, FilterSpec, PagedQuery};

/// A paged route: `GET {path}` with the page as the `:page` segment.
#[derive(Clone, Copy, Debug)]
pub struct PagedRoute {
    pub name: &'static str,
    pub path: &'static str,
    pub query: PagedQuery,
}

/// Speed averages grouped by one `datetimes` column, rounded to 3 decimal places.
macro_rules! avg_speed_select {
    ($key:literal) => {
        concat!(
            "SELECT ",
            $key,
            ", \
               round(avg(traffic.current_speed)::NUMERIC, 3) AS average_speed, \
               round(avg(traffic.free_flow_speed)::NUMERIC, 3) AS average_free_flow_speed, \
               round(avg(traffic.current_speed::NUMERIC / NULLIF(traffic.free_flow_speed, 0)) * 100, 3) AS pct_free_flow_capacity \
             FROM traffic \
             JOIN datetimes ON traffic.time_id = datetimes.time_id"
        )
    };
}

const WEATHER_HOUR: &str = "EXTRACT(hour FROM weather_backup_data.datetime)::int";

pub const TRAFFIC: PagedRoute = PagedRoute {
    name: "traffic_by_page",
    path: "/traffic/:page",
    query: PagedQuery {
        select: "SELECT \
                   traffic.traffic_id, \
                   traffic.road_id, \
                   roads.city, \
                   traffic.current_speed, \
                   traffic.free_flow_speed, \
                   round(traffic.current_speed::NUMERIC / NULLIF(traffic.free_flow_speed, 0) * 100, 2) AS speed_pct_of_capacity, \
                   traffic.current_travel_time, \
                   traffic.free_flow_travel_time, \
                   traffic.current_travel_time - traffic.free_flow_travel_time AS additional_travel_time_due_to_traffic, \
                   datetimes.time_added_pst AS time_pst \
                 FROM traffic \
                 JOIN datetimes ON traffic.time_id = datetimes.time_id \
                 JOIN roads ON traffic.road_id = roads.road_id",
        filter: Some(FilterSpec {
            param: "city",
            column: "roads.city",
            op: FilterOp::Eq,
            kind: FilterKind::Text,
        }),
        group_by: None,
        order_by: Some("traffic.traffic_id"),
    },
};

pub const AVG_HOUR_TRAFFIC: PagedRoute = PagedRoute {
    name: "avg_hour_traffic_by_page",
    path: "/avghourtraffic/:page",
    query: PagedQuery {
        select: avg_speed_select!("datetimes.hour"),
        filter: Some(FilterSpec {
            param: "hour",
            column: "datetimes.hour",
            op: FilterOp::Eq,
            kind: FilterKind::Integer,
        }),
        group_by: Some("datetimes.hour"),
        order_by: Some("datetimes.hour"),
    },
};

pub const AVG_DAY_TRAFFIC: PagedRoute = PagedRoute {
    name: "avg_day_traffic_by_page",
    path: "/avgdaytraffic/:page",
    query: PagedQuery {
        select: avg_speed_select!("datetimes.day_name"),
        filter: Some(FilterSpec {
            param: "day",
            column: "datetimes.day_name",
            op: FilterOp::Eq,
            kind: FilterKind::Text,
        }),
        group_by: Some("datetimes.day_name"),
        order_by: Some("pct_free_flow_capacity"),
    },
};

pub const TRAFFIC_BY_WEATHER: PagedRoute = PagedRoute {
    name: "traffic_by_weather",
    path: "/trafficbyweather/:page",
    query: PagedQuery {
        select: "SELECT * FROM traffic_weather",
        filter: Some(FilterSpec {
            param: "weather",
            column: "traffic_weather.conditions",
            op: FilterOp::Regex,
            kind: FilterKind::Text,
        }),
        group_by: None,
        order_by: None,
    },
};

pub const WEATHER_BACKUP: PagedRoute = PagedRoute {
    name: "weather_backup_listing",
    path: "/weatherstuff/:page",
    query: PagedQuery {
        select: "SELECT * FROM weather_backup_data",
        filter: None,
        group_by: None,
        order_by: Some("weather_backup_data.id"),
    },
};

pub const MAX_TEMP_BY_HOUR: PagedRoute = PagedRoute {
    name: "max_temp_by_hour",
    path: "/mtbh/:page",
    query: PagedQuery {
        select: "SELECT \
                   EXTRACT(hour FROM weather_backup_data.datetime)::int AS hour, \
                   max(weather_backup_data.temp) AS max_temp \
                 FROM weather_backup_data",
        filter: Some(FilterSpec {
            param: "hour",
            column: WEATHER_HOUR,
            op: FilterOp::Eq,
            kind: FilterKind::Integer,
        }),
        group_by: Some(WEATHER_HOUR),
        order_by: Some("hour"),
    },
};

pub const MIN_TEMP_BY_HOUR: PagedRoute = PagedRoute {
    name: "min_temp_by_hour",
    path: "/mintbh/:page",
    query: PagedQuery {
        select: "SELECT \
                   EXTRACT(hour FROM weather_backup_data.datetime)::int AS hour, \
                   min(weather_backup_data.temp) AS min_temp \
                 FROM weather_backup_data",
        filter: Some(FilterSpec {
            param: "hour",
            column: WEATHER_HOUR,
            op: FilterOp::Eq,
            kind: FilterKind::Integer,
        }),
        group_by: Some(WEATHER_HOUR),
        order_by: Some("hour"),
    },
};

/// Every hand-written paged route, in registration order.
pub const PAGED_ROUTES: &[PagedRoute] = &[
    TRAFFIC,
    AVG_HOUR_TRAFFIC,
    AVG_DAY_TRAFFIC,
    TRAFFIC_BY_WEATHER,
    WEATHER_BACKUP,
    MAX_TEMP_BY_HOUR,
    MIN_TEMP_BY_HOUR,
];
