use chart_url::appenders::GenericAppender;
use chart_url::coder::{AutoEncoder, Encoder};
use chart_url::data_types::ChartTypeFeature;
use chart_url::{
    AppendableFeature, Chart, ChartColor, ChartSpec, ChartTitle, ChartType, Dimension,
    GoogleOMeter, GoogleOMeterValue, OutputFormat, PieChart, PieChartSlice,
};

fn main() -> eyre::Result<()> {
    let mut pie = PieChart::new(Dimension::new(400, 180)?);
    pie.set_title(ChartTitle::new("GDP of the world (nominal)"));
    pie.add_slice(PieChartSlice::new(80.0).label("USA").color(ChartColor::BLUE));
    pie.add_slice(PieChartSlice::new(60.0).label("EU").color(ChartColor::from_hex("3072F3")?));
    pie.add_slice(PieChartSlice::new(45.0).label("China").color(ChartColor::RED));
    println!("{}", pie.url());

    let mut gauge = GoogleOMeter::new(Dimension::new(250, 100)?);
    gauge.add_value(GoogleOMeterValue::new("Load", 72.0));
    gauge.add_color(ChartColor::GREEN);
    gauge.add_color(ChartColor::RED);
    println!("{}", gauge.url_with_format(OutputFormat::Png));

    let series = vec![
        (0..20).map(|i| i * 3).collect::<Vec<i64>>(),
        (0..20).map(|i| 4095 - i * 150).collect::<Vec<i64>>(),
    ];
    let mut colors = GenericAppender::new(ChartTypeFeature::ChartColor);
    colors.add_all([ChartColor::BLUE, ChartColor::RED]);

    let mut line = ChartSpec::new(ChartType::LineChart, Dimension::new(500, 200)?);
    line.register(AppendableFeature::of(
        ChartTypeFeature::ChartData,
        AutoEncoder.encode_int_collection(&series, "|"),
    ))
    .register(colors);
    println!("{}", line.url());
    println!("{}", line.post_request());

    Ok(())
}
