use eyre::Context;
use ledger::Gym;
use log::info;
use model::{
    forum::Forum,
    person::{Gender, Person},
    session::SessionKind,
};
use storage::Storage;

fn main() -> eyre::Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;
    let env = env::Env::load().context("Failed to load configuration")?;

    info!("creating gym {}", env.gym_name());
    let gym = Gym::new(Storage::new(), env.gym_config());
    run_demo(&gym)?;

    println!("{}", gym.report());
    Ok(())
}

/// A scripted administrative day: staff, clients, sessions, enrollments,
/// notifications and payroll.
fn run_demo(gym: &Gym) -> eyre::Result<()> {
    let secretary = gym.appoint_secretary(
        &Person::new("Noa", 0, Gender::Female, "12-04-1990")?,
        8000,
    );

    let coach = secretary.hire_instructor(
        &Person::new("Yuval", 100, Gender::Male, "23-02-1987")?,
        120,
        vec![SessionKind::Pilates, SessionKind::MachinePilates],
    )?;
    let fighter = secretary.hire_instructor(
        &Person::new("Elis", 50, Gender::Female, "14-09-1980")?,
        150,
        vec![SessionKind::ThaiBoxing, SessionKind::Ninja],
    )?;

    let dana = secretary.register_client(&Person::new("Dana", 500, Gender::Female, "01-03-1995")?)?;
    let avi = secretary.register_client(&Person::new("Avi", 90, Gender::Male, "07-11-1955")?)?;
    if let Err(err) =
        secretary.register_client(&Person::new("Tom", 300, Gender::Male, "05-05-2015")?)
    {
        info!("rejected: {}", err);
    }

    let pilates = secretary.open_session(
        SessionKind::Pilates,
        "23-01-2100 10:00",
        Forum::All,
        &coach,
    )?;
    let boxing = secretary.open_session(
        SessionKind::ThaiBoxing,
        "23-01-2100 18:00",
        Forum::Female,
        &fighter,
    )?;
    let seniors = secretary.open_session(
        SessionKind::MachinePilates,
        "24-01-2100 09:00",
        Forum::Seniors,
        &coach,
    )?;
    if let Err(err) = secretary.open_session(SessionKind::Ninja, "25-01-2100 12:00", Forum::All, &coach) {
        info!("rejected: {}", err);
    }

    for (client, session) in [
        (&dana, &pilates),
        (&dana, &boxing),
        (&avi, &boxing),
        (&avi, &seniors),
        (&dana, &seniors),
    ] {
        let outcome = secretary.enroll(client, session)?;
        info!("{} -> {}: {:?}", client.name(), session.kind(), outcome);
    }
    if let Err(err) = secretary.enroll(&dana, &pilates) {
        info!("rejected: {}", err);
    }

    secretary.notify_session(&boxing, "The boxing ring is being renovated")?;
    secretary.notify_date("23-01-2100", "Parking is closed on Thursday")?;
    secretary.notify_all("The gym is closed on Saturday")?;
    secretary.pay_salaries()?;

    secretary.print_actions(&mut std::io::stdout())?;
    info!("Dana's inbox: {}", dana.notifications_summary());
    Ok(())
}
