#[cfg(test)]
mod tests {
    use my_surf::hooks::use_spot_report::{LoadStatus, ReportAction, ReportState};
    use my_surf::hooks::use_spots::SpotsState;
    use my_surf::models::{
        conditions::Conditions,
        error::AppError,
        forecast::ForecastEntry,
        report::{LoadSequencer, SpotReport},
        spot::{Spot, SpotId, parse_spot_id},
    };
    use my_surf::services::api::{Decoded, decode_envelope};
    use std::rc::Rc;
    use yew::Reducible;

    const CONDITIONS_BODY: &str = r#"{
        "succes": true,
        "donnees": {
            "vague": {"hauteur": 1.2, "direction": 180, "direction_label": "Sud", "periode": 8},
            "vent": {"vitesse": 12, "direction": 270, "direction_label": "Ouest"},
            "maree": {"basse": {"heure": "04:32"}, "haute": {"heure": "10:15"}}
        }
    }"#;

    const FORECAST_BODY: &str = r#"{
        "succes": true,
        "donnees": [
            {"libelle": "AUJOURD'HUI", "note": 4, "hauteur_vague": 1.5, "periode_vague": 12,
             "vitesse_vent": 15, "direction_vent": "NE", "date": "2025-06-01"},
            {"libelle": "JOUR +1", "note": 3, "hauteur_vague": 1.2, "periode_vague": 10,
             "vitesse_vent": 20, "direction_vent": "E", "date": null},
            {"libelle": "JOUR +2", "note": -1, "hauteur_vague": 2.0, "periode_vague": 14,
             "vitesse_vent": 10, "direction_vent": "SW"}
        ]
    }"#;

    // Helper function to build a complete report for a spot
    fn report_for(spot_id: SpotId, wave_height: f64) -> SpotReport {
        let mut conditions: Conditions = decode_envelope(CONDITIONS_BODY).unwrap().data;
        conditions.wave.height = wave_height;
        let forecast: Vec<ForecastEntry> = decode_envelope(FORECAST_BODY).unwrap().data;

        SpotReport::from_parts(spot_id, Ok(conditions), Ok(forecast)).unwrap()
    }

    fn reduce(state: Rc<ReportState>, action: ReportAction) -> Rc<ReportState> {
        state.reduce(action)
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::Network("Connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: Connection refused");

        let error = AppError::DomMissing("#app".to_string());
        assert_eq!(error.to_string(), "Missing DOM element: #app");
    }

    // ===== Wire Format Tests =====

    #[test]
    fn test_conditions_envelope_renders_expected_text() {
        let decoded: Decoded<Conditions> = decode_envelope(CONDITIONS_BODY).unwrap();
        let display = decoded.data.display();

        assert_eq!(display.wave_height, "1.2 m");
        assert_eq!(display.wave_direction, "Sud (180°)");
        assert_eq!(display.wave_period, "8 s");
        assert_eq!(display.wind_speed, "12 kt");
        assert_eq!(display.wind_direction, "Ouest (270°)");
        assert_eq!(display.low_tide, "04:32");
        assert_eq!(display.high_tide, "10:15");
    }

    #[test]
    fn test_forecast_keeps_input_order_and_clamps_stars() {
        let forecast: Vec<ForecastEntry> = decode_envelope(FORECAST_BODY).unwrap().data;

        let labels: Vec<&str> = forecast.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["AUJOURD'HUI", "JOUR +1", "JOUR +2"]);

        assert_eq!(forecast[1].stars(), "⭐⭐⭐");
        assert_eq!(forecast[2].star_count(), 0);
        assert_eq!(
            forecast[0].date,
            chrono::NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(forecast[1].date, None);
    }

    #[test]
    fn test_spot_options_match_spots() {
        let body = r#"{"succes": true, "nombre": 3, "donnees": [
            {"id": 1, "nom": "Hossegor - Plage Nord"},
            {"id": 2, "nom": "Hossegor - La Gravière"},
            {"id": 3, "nom": "Biarritz - Grande Plage"}
        ]}"#;
        let spots: Vec<Spot> = decode_envelope(body).unwrap().data;

        assert_eq!(spots.len(), 3);
        for spot in &spots {
            assert_eq!(parse_spot_id(&spot.option_value()), Some(spot.id));
        }
        assert_eq!(spots[2].name, "Biarritz - Grande Plage");
    }

    #[test]
    fn test_unsuccessful_forecast_blocks_report() {
        let conditions = decode_envelope::<Conditions>(CONDITIONS_BODY).map(|d| d.data);
        let forecast = decode_envelope::<Vec<ForecastEntry>>(r#"{"succes": false}"#).map(|d| d.data);

        assert!(SpotReport::from_parts(1, conditions, forecast).is_err());
    }

    // ===== SpotsState Tests =====

    #[test]
    fn test_first_spot() {
        let spots = SpotsState::Loaded(Rc::new(vec![Spot::new(4, "A"), Spot::new(9, "B")]));
        assert_eq!(spots.first_spot(), Some(4));
    }

    #[test]
    fn test_empty_spot_list_has_no_initial_load() {
        let spots = SpotsState::Loaded(Rc::new(Vec::new()));
        assert_eq!(spots.data().map(|s| s.len()), Some(0));
        assert_eq!(spots.first_spot(), None);

        assert_eq!(SpotsState::Loading.first_spot(), None);
        assert_eq!(SpotsState::Error("down".to_string()).first_spot(), None);
    }

    // ===== ReportState Tests =====

    #[test]
    fn test_successful_load() {
        let sequencer = LoadSequencer::new();
        let ticket = sequencer.issue(1);

        let state = reduce(Rc::default(), ReportAction::Requested(ticket));
        assert_eq!(state.status(), &LoadStatus::Loading(1));
        assert!(state.is_loading());
        assert!(state.report().is_none());

        let state = reduce(state, ReportAction::Completed(ticket, Ok(report_for(1, 1.2))));
        assert_eq!(state.status(), &LoadStatus::Ready);
        assert_eq!(state.report().unwrap().spot_id, 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_report() {
        let sequencer = LoadSequencer::new();

        let first = sequencer.issue(1);
        let state = reduce(Rc::default(), ReportAction::Requested(first));
        let state = reduce(state, ReportAction::Completed(first, Ok(report_for(1, 1.2))));
        let before = state.report().cloned();

        let second = sequencer.issue(2);
        let state = reduce(state, ReportAction::Requested(second));
        let state = reduce(
            state,
            ReportAction::Completed(
                second,
                Err(AppError::Protocol("Request unsuccessful: no message".to_string())),
            ),
        );

        assert_eq!(state.report().cloned(), before);
        assert_eq!(
            state.status(),
            &LoadStatus::Failed("Protocol error: Request unsuccessful: no message".to_string())
        );
    }

    #[test]
    fn test_last_selection_wins() {
        let sequencer = LoadSequencer::new();
        let a = sequencer.issue(1);
        let b = sequencer.issue(2);

        let state = reduce(Rc::default(), ReportAction::Requested(a));
        let state = reduce(state, ReportAction::Requested(b));

        // B resolves first, then the slower A response arrives
        let state = reduce(state, ReportAction::Completed(b, Ok(report_for(2, 2.0))));
        let state = reduce(state, ReportAction::Completed(a, Ok(report_for(1, 0.5))));

        let shown = state.report().unwrap();
        assert_eq!(shown.spot_id, 2);
        assert_eq!(shown.conditions.display().wave_height, "2 m");
        assert!(!sequencer.is_latest(&a));
    }

    #[test]
    fn test_stale_response_while_newer_load_pending() {
        let sequencer = LoadSequencer::new();
        let a = sequencer.issue(1);
        let b = sequencer.issue(2);

        let state = reduce(Rc::default(), ReportAction::Requested(a));
        let state = reduce(state, ReportAction::Requested(b));
        let state = reduce(state, ReportAction::Completed(a, Ok(report_for(1, 0.5))));

        assert!(state.report().is_none());
        assert_eq!(state.status(), &LoadStatus::Loading(2));
    }

    #[test]
    fn test_stale_failure_does_not_surface() {
        let sequencer = LoadSequencer::new();
        let a = sequencer.issue(1);
        let b = sequencer.issue(2);

        let state = reduce(Rc::default(), ReportAction::Requested(a));
        let state = reduce(state, ReportAction::Requested(b));
        let state = reduce(state, ReportAction::Completed(b, Ok(report_for(2, 1.0))));
        let state = reduce(
            state,
            ReportAction::Completed(a, Err(AppError::Network("timeout".to_string()))),
        );

        assert_eq!(state.status(), &LoadStatus::Ready);
        assert_eq!(state.report().unwrap().spot_id, 2);
    }

    #[test]
    fn test_out_of_order_request_is_ignored() {
        let sequencer = LoadSequencer::new();
        let a = sequencer.issue(1);
        let b = sequencer.issue(2);

        let state = reduce(Rc::default(), ReportAction::Requested(b));
        let state = reduce(state, ReportAction::Requested(a));

        assert_eq!(state.latest(), Some(b));
        assert_eq!(state.status(), &LoadStatus::Loading(2));
    }

    #[test]
    fn test_request_records_latest_ticket() {
        let sequencer = LoadSequencer::new();
        let ticket = sequencer.issue(3);
        let state = reduce(Rc::default(), ReportAction::Requested(ticket));

        assert_eq!(state.latest().map(|t| t.spot_id()), Some(3));
        assert_eq!(ticket.seq(), 1);
    }
}
