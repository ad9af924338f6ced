use std::collections::BTreeSet;

use docfinder_core::autocomplete::{MAX_SUGGESTIONS, MIN_QUERY_CHARS};
use docfinder_core::filter::sort_doctors;
use docfinder_core::models::{ConsultationMode, DoctorRecord, FilterCriteria, SortKey};
use docfinder_core::{QueryCodec, apply, suggest};
use proptest::prelude::*;
use reqwest::Url;

const MODES: [&str; 2] = ["Video Consult", "In Clinic"];
const SPECIALITIES: [&str; 5] = [
    "Cardiologist",
    "Dermatologist",
    "Dietitian/Nutritionist",
    "Ear-Nose-Throat (ENT)",
    "General Physician",
];

fn codec() -> QueryCodec {
    QueryCodec::new(
        MODES.iter().map(ToString::to_string).collect(),
        Url::parse("http://localhost/doctors").expect("base url"),
    )
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::None),
        Just(SortKey::Fees),
        Just(SortKey::Experience),
    ]
}

fn consultation() -> impl Strategy<Value = ConsultationMode> {
    prop_oneof![
        Just(ConsultationMode::All),
        proptest::sample::select(MODES.to_vec())
            .prop_map(|mode| ConsultationMode::Mode(mode.to_string())),
    ]
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        "[a-zA-Z0-9 &=+%#?/.é]{0,16}",
        proptest::collection::btree_set("[a-zA-Z &/+=()]{1,12}", 0..4),
        consultation(),
        sort_key(),
    )
        .prop_map(
            |(name_query, selected_specialities, consultation_mode, sort_key)| FilterCriteria {
                name_query,
                selected_specialities,
                consultation_mode,
                sort_key,
            },
        )
}

fn record() -> impl Strategy<Value = DoctorRecord> {
    (
        "[A-Za-z. ]{1,12}",
        proptest::option::of(proptest::sample::subsequence(SPECIALITIES.to_vec(), 1..3)),
        proptest::option::of(proptest::sample::select(MODES.to_vec())),
        proptest::option::of(0u16..5),
        proptest::option::of(0u16..5),
    )
        .prop_map(|(name, specialities, mode, fee, experience)| {
            let mut doctor = DoctorRecord::named(name);
            doctor.speciality = specialities.map(|labels| labels.join(", "));
            doctor.consultation_mode = mode.map(ToString::to_string);
            doctor.fee = fee.map(f64::from);
            doctor.experience = experience.map(f64::from);
            doctor
        })
}

fn dataset() -> impl Strategy<Value = Vec<DoctorRecord>> {
    proptest::collection::vec(record(), 0..24).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(idx, mut doctor)| {
                doctor.name = format!("{} #{idx}", doctor.name);
                doctor
            })
            .collect()
    })
}

fn names(doctors: &[DoctorRecord]) -> Vec<String> {
    doctors.iter().map(|doctor| doctor.name.clone()).collect()
}

proptest! {
    #[test]
    fn decode_inverts_encode(criteria in criteria()) {
        let codec = codec();
        prop_assert_eq!(codec.decode(&codec.encode(&criteria)), criteria);
    }

    #[test]
    fn encoding_is_idempotent_through_decode(criteria in criteria()) {
        let codec = codec();
        let once = codec.encode(&criteria);
        prop_assert_eq!(codec.encode(&codec.decode(&once)), once);
    }

    #[test]
    fn decode_tolerates_arbitrary_query_text(query in ".{0,64}") {
        let codec = codec();
        let decoded = codec.decode(&query);
        let canonical = codec.encode(&decoded);
        prop_assert_eq!(codec.encode(&codec.decode(&canonical)), canonical);
    }

    #[test]
    fn speciality_filter_only_narrows(
        doctors in dataset(),
        base in criteria(),
        picked in proptest::sample::subsequence(SPECIALITIES.to_vec(), 1..4),
    ) {
        let unfiltered = FilterCriteria {
            selected_specialities: BTreeSet::new(),
            ..base
        };
        let mut filtered = unfiltered.clone();
        filtered.selected_specialities = picked.iter().map(ToString::to_string).collect();

        let wide = names(&apply(&doctors, &unfiltered));
        let narrow = names(&apply(&doctors, &filtered));
        prop_assert!(narrow.len() <= wide.len());
        prop_assert!(narrow.iter().all(|name| wide.contains(name)));
    }

    #[test]
    fn resorting_by_same_key_keeps_order(doctors in dataset(), key in sort_key()) {
        let mut once = doctors;
        sort_doctors(&mut once, key);
        let mut twice = once.clone();
        sort_doctors(&mut twice, key);
        prop_assert_eq!(names(&twice), names(&once));
    }

    #[test]
    fn unsorted_results_keep_dataset_order(doctors in dataset()) {
        let result = apply(&doctors, &FilterCriteria::default());
        prop_assert_eq!(names(&result), names(&doctors));
    }

    #[test]
    fn suggestions_are_bounded(doctors in dataset(), partial in ".{0,6}") {
        let suggestions = suggest(&doctors, &partial);
        prop_assert!(suggestions.len() <= MAX_SUGGESTIONS);
        if partial.chars().count() < MIN_QUERY_CHARS {
            prop_assert!(suggestions.is_empty());
        }
    }
}
