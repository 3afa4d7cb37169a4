mod common;

use std::io::{self, ErrorKind};

use common::MockDestination;

use shift_fixtures::{
    FixtureError, Stage,
    core::{
        job::{Job, JobBuilder},
        step::{StepBuilder, StepInstance, StepStatus},
    },
    generator::{Pool, RecordLineProcessor, RecordReaderBuilder, SeededIndexSource, ShiftRecord},
    item::line::LineItemWriterBuilder,
};

#[test]
fn generate_records_to_failing_destination() {
    let names = Pool::names(common::names());
    let (weekdays, shifts) = (Pool::weekdays(), Pool::shifts());
    let source = SeededIndexSource::new(8);

    let reader = RecordReaderBuilder::new(&names, &weekdays, &shifts)
        .source(&source)
        .number_of_items(3)
        .build();

    let mut destination = MockDestination::default();
    destination.expect_write().returning(|_buf| {
        let err = io::Error::from(ErrorKind::PermissionDenied);
        Result::Err(err)
    });
    destination.expect_flush().returning(|| Ok(()));

    let writer = LineItemWriterBuilder::new().from_writer(destination);

    let step: StepInstance<ShiftRecord, String> = StepBuilder::new()
        .reader(&reader)
        .processor(&RecordLineProcessor)
        .writer(&writer)
        .build();

    let job = JobBuilder::new().start(&step).build();
    let result = job.run();

    match result {
        Err(FixtureError::FileAccess { stage, source, .. }) => {
            assert_eq!(stage, Stage::Write);
            assert_eq!(source.kind(), ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(step.get_status(), StepStatus::WriteError);
    assert_eq!(step.get_read_count(), 3);
    assert_eq!(step.get_process_count(), 3);
    assert_eq!(step.get_write_count(), 0);
}

#[test]
fn generate_records_to_memory() {
    let names = Pool::names(common::names());
    let (weekdays, shifts) = (Pool::weekdays(), Pool::shifts());
    let source = SeededIndexSource::new(8);

    let reader = RecordReaderBuilder::new(&names, &weekdays, &shifts)
        .source(&source)
        .number_of_items(25)
        .build();

    let writer = LineItemWriterBuilder::new().from_writer(Vec::new());

    {
        let step: StepInstance<ShiftRecord, String> = StepBuilder::new()
            .name("to-memory")
            .reader(&reader)
            .processor(&RecordLineProcessor)
            .writer(&writer)
            .build();

        let job = JobBuilder::new().start(&step).build();
        let execution = job.run().unwrap();
        assert_eq!(execution.steps[0].write_count, 25);
    }

    let content = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    common::assert_well_formed(&content, 25);
}

#[test]
fn empty_name_pool_fails_before_anything_is_written() {
    let names = Pool::names(Vec::<String>::new());
    let (weekdays, shifts) = (Pool::weekdays(), Pool::shifts());

    let reader = RecordReaderBuilder::new(&names, &weekdays, &shifts)
        .number_of_items(3)
        .build();

    let mut destination = MockDestination::default();
    destination.expect_write().never();
    destination.expect_flush().never();

    let writer = LineItemWriterBuilder::new().from_writer(destination);

    let step: StepInstance<ShiftRecord, String> = StepBuilder::new()
        .reader(&reader)
        .processor(&RecordLineProcessor)
        .writer(&writer)
        .build();

    let job = JobBuilder::new().start(&step).build();
    let result = job.run();

    assert!(matches!(result, Err(FixtureError::EmptyPool { .. })));
    assert_eq!(step.get_status(), StepStatus::ReadError);
    assert_eq!(step.get_read_count(), 0);
}
