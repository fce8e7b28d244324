use chart_url::coder::{SimpleEncoder, TextEncoder};
use chart_url::data_types::DataScalingSet;
use chart_url::{
    Chart, ChartColor, ChartTitle, ConcentricPieChart, Dimension, GoogleOMeter, GoogleOMeterValue,
    PieChart, PieChartSlice,
};

const BASE: &str = "http://chart.apis.google.com/chart?";

fn pie() -> PieChart {
    PieChart::new(Dimension::new(400, 180).unwrap())
}

#[test]
fn test_pie_chart_url() {
    let mut chart = pie();
    chart.add_slice(PieChartSlice::new(80.0).label("USA").color(ChartColor::BLUE));
    chart.add_slice(PieChartSlice::new(20.0).label("EU").color(ChartColor::RED));
    assert_eq!(
        chart.url(),
        format!("{BASE}cht=p&chs=400x180&chco=0000FF|FF0000&chd=e:BQAU&chl=USA|EU")
    );
}

#[test]
fn test_pie_chart_3d_toggle() {
    let mut chart = pie();
    assert!(!chart.is_3d());
    chart.set_3d(true);
    assert!(chart.url().starts_with(&format!("{BASE}cht=p3&")));
    chart.set_3d(false);
    assert!(chart.url().starts_with(&format!("{BASE}cht=p&")));
}

#[test]
fn test_empty_pie_chart() {
    assert_eq!(pie().url(), format!("{BASE}cht=p&chs=400x180"));
}

#[test]
fn test_percentage_scaling() {
    let mut chart = PieChart::with_slices(
        Dimension::new(300, 300).unwrap(),
        [1.0, 1.0, 2.0].map(PieChartSlice::new),
    );
    chart.set_percentage_scaling(true);
    assert_eq!(chart.url(), format!("{BASE}cht=p&chs=300x300&chd=t:25,25,50"));
    chart.set_percentage_scaling(false);
    assert_eq!(chart.url(), format!("{BASE}cht=p&chs=300x300&chd=s:BBC"));
}

#[test]
fn test_data_scaling_switches_encoder() {
    let mut chart = PieChart::with_slices(
        Dimension::new(300, 300).unwrap(),
        [50.0, 150.0].map(PieChartSlice::new),
    );
    chart.set_data_scaling(DataScalingSet::new(0.0, 200.0).unwrap());
    assert_eq!(
        chart.url(),
        format!("{BASE}cht=p&chs=300x300&chd=t:50,150&chds=0,200")
    );

    chart.set_data_scaling(DataScalingSet::new(10.0, 300.0).unwrap());
    assert_eq!(chart.data_scaling().map(|s| s.max()), Some(300.0));
    assert!(chart.url().ends_with("&chds=10,300"));

    chart.remove_data_scaling();
    assert!(chart.data_scaling().is_none());
    assert_eq!(chart.url(), format!("{BASE}cht=p&chs=300x300&chd=e:AyCW"));
}

#[test]
fn test_custom_encoder() {
    let mut chart = pie();
    chart.add_slices([10.0, 100.0].map(PieChartSlice::new));
    chart.set_encoder(SimpleEncoder);
    assert!(chart.url().ends_with("&chd=s:K9"));
    chart.remove_encoder();
    assert!(chart.url().ends_with("&chd=e:AKBk"));
}

#[test]
fn test_slice_and_chart_colors_merge() {
    let mut chart = pie();
    chart.add_slice(PieChartSlice::new(1.0).color(ChartColor::BLUE));
    chart.add_slice(PieChartSlice::new(2.0).color(ChartColor::RED));
    chart.add_chart_color(ChartColor::GREEN);
    assert!(chart.url().contains("&chco=0000FF|FF0000,00FF00&"));
    assert!(chart.remove_chart_color_value(&ChartColor::GREEN));
    assert!(chart.chart_colors().is_empty());
}

#[test]
fn test_slice_colors_need_every_slice_colored() {
    let mut chart = pie();
    chart.add_slice(PieChartSlice::new(1.0).color(ChartColor::BLUE));
    chart.add_slice(PieChartSlice::new(2.0));
    assert_eq!(chart.url(), format!("{BASE}cht=p&chs=400x180&chd=s:BC"));

    chart.remove_all_slices();
    chart.add_slice(PieChartSlice::new(1.0).color(ChartColor::BLUE));
    chart.add_slice(PieChartSlice::new(2.0).color(ChartColor::RED));
    assert!(chart.url().contains("&chco=0000FF|FF0000&"));
}

#[test]
fn test_labels_with_gaps() {
    let mut chart = pie();
    chart.add_slice(PieChartSlice::new(1.0).label("a"));
    chart.add_slice(PieChartSlice::new(2.0));
    chart.add_slice(PieChartSlice::new(3.0).label("c"));
    assert!(chart.url().ends_with("&chl=a||c"));
}

#[test]
fn test_slice_removal() {
    let mut chart = pie();
    let slice = PieChartSlice::new(5.0).label("x");
    chart.add_slice(slice.clone());
    chart.add_slice(PieChartSlice::new(6.0));
    assert_eq!(chart.remove_slice(7), None);
    assert!(chart.remove_slice_value(&slice));
    assert_eq!(chart.slices().len(), 1);
    chart.remove_all_slices();
    assert_eq!(chart.url(), format!("{BASE}cht=p&chs=400x180"));
}

#[test]
fn test_title() {
    let mut chart = pie();
    chart.add_slice(PieChartSlice::new(1.0).label("a"));
    chart.set_title(ChartTitle::new("GDP of the world").color(ChartColor::RED).font_size(12));
    assert_eq!(
        chart.url(),
        format!("{BASE}cht=p&chs=400x180&chd=s:B&chl=a&chts=FF0000,12&chtt=GDP+of+the+world")
    );
    chart.remove_title();
    assert!(chart.title().is_none());
    assert!(!chart.url().contains("chtt"));
}

#[test]
fn test_concentric_pie_chart() {
    let mut chart = ConcentricPieChart::new(Dimension::new(300, 300).unwrap());
    chart.add_ring([1.0, 2.0].map(PieChartSlice::new).to_vec());
    chart.add_ring([3.0, 4.0].map(PieChartSlice::new).to_vec());
    assert_eq!(chart.url(), format!("{BASE}cht=pc&chs=300x300&chd=s:BC,DE"));
}

#[test]
fn test_concentric_rings_share_encoding() {
    let mut chart = ConcentricPieChart::new(Dimension::new(300, 300).unwrap());
    chart.add_ring(vec![PieChartSlice::new(1.0).label("in").color(ChartColor::RED)]);
    chart.add_ring(vec![PieChartSlice::new(100.0).label("out").color(ChartColor::BLUE)]);
    assert_eq!(
        chart.url(),
        format!("{BASE}cht=pc&chs=300x300&chco=FF0000,0000FF&chd=e:AB,Bk&chl=in|out")
    );
    assert_eq!(chart.remove_ring(0).map(|r| r.len()), Some(1));
    assert_eq!(chart.rings().len(), 1);
}

#[test]
fn test_concentric_text_rings() {
    let mut chart = ConcentricPieChart::new(Dimension::new(300, 300).unwrap());
    chart.add_ring([1.0, 3.0].map(PieChartSlice::new).to_vec());
    chart.add_ring([2.0, 2.0].map(PieChartSlice::new).to_vec());

    chart.set_percentage_scaling(true);
    assert_eq!(chart.url(), format!("{BASE}cht=pc&chs=300x300&chd=t:25,75|50,50"));

    chart.set_encoder(TextEncoder);
    assert_eq!(chart.url(), format!("{BASE}cht=pc&chs=300x300&chd=t:1,3|2,2"));

    chart.set_percentage_scaling(false);
    assert_eq!(chart.url(), format!("{BASE}cht=pc&chs=300x300&chd=s:BD,CC"));
}

#[test]
fn test_google_o_meter() {
    let mut chart = GoogleOMeter::new(Dimension::new(250, 100).unwrap());
    chart.add_value(GoogleOMeterValue::new("Good", 70.0));
    chart.add_color(ChartColor::RED);
    chart.add_color(ChartColor::GREEN);
    assert_eq!(
        chart.url(),
        format!("{BASE}cht=gom&chs=250x100&chco=FF0000,00FF00&chd=t:70&chl=Good")
    );

    chart.set_encoder(SimpleEncoder);
    assert!(chart.url().contains("&chd=s:9&"));
    chart.remove_encoder();
    assert!(chart.url().contains("&chd=t:70&"));
}

#[test]
fn test_google_o_meter_unlabelled() {
    let mut chart = GoogleOMeter::new(Dimension::new(250, 100).unwrap());
    chart.add_value(GoogleOMeterValue::new("", 30.5));
    assert_eq!(chart.url(), format!("{BASE}cht=gom&chs=250x100&chd=t:30.5"));
    assert_eq!(chart.remove_value(0).map(|v| v.value), Some(30.5));
    assert!(chart.values().is_empty());
}
