use std::io::Write;

use paddle_sim::{Sample, SimulationResult, Summary};
use serde::Serialize;
use uom::si::{
    force::newton, length::meter, time::second, velocity::meter_per_second,
};

/// One CSV row, with units spelled out in the column names.
#[derive(Debug, Serialize)]
struct SampleRow {
    time_s: f64,
    paddle_force_n: f64,
    drag_force_n: f64,
    net_force_n: f64,
    speed_m_per_s: f64,
    distance_m: f64,
}

impl From<&Sample> for SampleRow {
    fn from(sample: &Sample) -> Self {
        Self {
            time_s: sample.time.get::<second>(),
            paddle_force_n: sample.paddle_force.get::<newton>(),
            drag_force_n: sample.drag_force.get::<newton>(),
            net_force_n: sample.net_force.get::<newton>(),
            speed_m_per_s: sample.speed.get::<meter_per_second>(),
            distance_m: sample.distance.get::<meter>(),
        }
    }
}

/// Writes one CSV row per sample, with a header.
pub fn write_csv<W: Write>(writer: W, samples: &[Sample]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for sample in samples {
        writer.serialize(SampleRow::from(sample))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the whole result, inputs included, as pretty-printed JSON.
pub fn write_json<W, S>(writer: W, result: &SimulationResult<S>) -> anyhow::Result<()>
where
    W: Write,
    S: Serialize,
{
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}

/// Formats a summary for the terminal.
pub fn summary_table(summary: &Summary) -> String {
    format!(
        "steps            {}\n\
         total time       {:.2} s\n\
         final distance   {:.2} m\n\
         final speed      {:.3} m/s\n\
         peak speed       {:.3} m/s\n\
         average speed    {:.3} m/s\n\
         average net      {:.2} N\n",
        summary.steps,
        summary.total_time.get::<second>(),
        summary.final_distance.get::<meter>(),
        summary.final_speed.get::<meter_per_second>(),
        summary.peak_speed.get::<meter_per_second>(),
        summary.average_speed.get::<meter_per_second>(),
        summary.average_net_force.get::<newton>(),
    )
}
