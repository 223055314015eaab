use super::model::Dataset;

// ---------------------------------------------------------------------------
// Plotting subset
// ---------------------------------------------------------------------------

/// Return indices of records that can be placed on the chart.
///
/// A record is plottable when both `bill_length_mm` and `flipper_length_mm`
/// are finite numbers. Missing cells, text and NaN/infinite values exclude
/// the row. The dataset itself is left untouched.
pub fn plotting_indices(dataset: &Dataset) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| rec.plotted_point().is_some())
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    const CSV: &str = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year
Adelie,Torgersen,39.1,18.7,181,3750,male,2007
Adelie,Torgersen,,,,,,2007
Gentoo,Biscoe,46.1,13.2,211,4500,female,2007
Gentoo,Biscoe,47.0,,unknown,4600,,2008
Chinstrap,Dream,NaN,19.4,193,3800,male,2007
Chinstrap,Dream,50.6,19.4,193,,male,2007
";

    #[test]
    fn keeps_only_rows_with_both_measurements() {
        let ds = parse_csv(CSV.as_bytes()).unwrap();
        let idx = plotting_indices(&ds);
        assert_eq!(idx, vec![0, 2, 5]);
        for i in idx {
            assert!(ds.records[i].bill_length_mm.as_finite().is_some());
            assert!(ds.records[i].flipper_length_mm.as_finite().is_some());
        }
    }

    #[test]
    fn filtering_is_a_view() {
        let ds = parse_csv(CSV.as_bytes()).unwrap();
        let _ = plotting_indices(&ds);
        assert_eq!(ds.len(), 6);
    }
}
