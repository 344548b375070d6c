//! The fixed seed timetable the application starts from.

use crate::schedule::{Day, Section, SessionRecord, TimeSlot};

fn rec(day: Day, label: &str, subject: &str, instructor: &str, section: char) -> SessionRecord {
    SessionRecord::new(
        day,
        TimeSlot::from_label(label).expect("seed slot label is in the catalog"),
        subject,
        instructor,
        Section::new(section).expect("seed section letter is uppercase"),
    )
}

/// The MCA weekly timetable for sections A-D.
///
/// Thursday 12:00 carries two parallel lab groups in sections C and D; raw
/// insertion permits that, the mutation engine will not add more.
pub fn seed_records() -> Vec<SessionRecord> {
    vec![
        // MONDAY, sections A & B (LT-402)
        rec(Day::Mon, "8:00-8:55", "TMC202", "Mr. Amit Juyal", 'A'),
        rec(Day::Mon, "8:55-9:50", "TMC201", "Dr. Udham Singh", 'A'),
        rec(Day::Mon, "10:10-11:05", "PBL", "-", 'A'),
        rec(Day::Mon, "11:05-12:00", "XMC201", "Mr. Digamber", 'A'),
        rec(Day::Mon, "8:00-8:55", "TMC202", "Mr. Amit Juyal", 'B'),
        rec(Day::Mon, "8:55-9:50", "TMC201", "Dr. Udham Singh", 'B'),
        rec(Day::Mon, "10:10-11:05", "PBL", "-", 'B'),
        rec(Day::Mon, "11:05-12:00", "XMC201", "Mr. Digamber", 'B'),
        // MONDAY, sections C & D (LT-501)
        rec(Day::Mon, "8:00-8:55", "TMC201", "Dr. Udham Singh", 'C'),
        rec(Day::Mon, "8:55-9:50", "TMC202", "Mr. Amit Juyal", 'C'),
        rec(Day::Mon, "10:10-11:05", "PBL", "-", 'C'),
        rec(Day::Mon, "11:05-12:00", "PBL", "-", 'C'),
        rec(Day::Mon, "8:00-8:55", "TMC201", "Dr. Udham Singh", 'D'),
        rec(Day::Mon, "8:55-9:50", "TMC202", "Mr. Amit Juyal", 'D'),
        rec(Day::Mon, "10:10-11:05", "PBL", "-", 'D'),
        rec(Day::Mon, "11:05-12:00", "PBL", "-", 'D'),
        // TUESDAY
        rec(Day::Tue, "8:00-9:50", "PMC201", "Sec. A (Lab 7)", 'A'),
        rec(Day::Tue, "8:00-9:50", "PMC202", "Sec. B (IoT Lab)", 'B'),
        rec(Day::Tue, "10:10-11:05", "TMC203", "Mr. Neeraj", 'A'),
        rec(Day::Tue, "10:10-11:05", "TMC203", "Mr. Neeraj", 'B'),
        rec(Day::Tue, "12:00-12:55", "PMC201", "Sec. C (Lab 7)", 'C'),
        rec(Day::Tue, "12:00-12:55", "PMC202", "Sec. D (IoT Lab)", 'D'),
        rec(Day::Tue, "2:10-3:05", "PMC203", "Sec. D (IoT Lab)", 'D'),
        // WEDNESDAY
        rec(Day::Wed, "8:00-8:55", "XMC201", "Mr. Aanand", 'A'),
        rec(Day::Wed, "8:55-9:50", "TMC201", "Dr. Udham Singh", 'A'),
        rec(Day::Wed, "10:10-11:05", "TMC203", "Mr. Neeraj", 'A'),
        rec(Day::Wed, "11:05-12:00", "PDP PRACTICAL", "Ms. Sakshi", 'A'),
        rec(Day::Wed, "12:00-12:55", "TMC202", "Mr. Amit Juyal", 'A'),
        rec(Day::Wed, "2:10-3:05", "PMC201", "Sec. B (Lab 7)", 'A'),
        rec(Day::Wed, "8:00-8:55", "XMC201", "Mr. Aanand", 'B'),
        rec(Day::Wed, "8:55-9:50", "TMC201", "Dr. Udham Singh", 'B'),
        rec(Day::Wed, "10:10-11:05", "TMC203", "Mr. Neeraj", 'B'),
        rec(Day::Wed, "11:05-12:00", "PDP PRACTICAL", "Ms. Sakshi", 'B'),
        rec(Day::Wed, "12:00-12:55", "TMC202", "Mr. Amit Juyal", 'B'),
        rec(Day::Wed, "2:10-3:05", "PMC201", "Sec. B (Lab 7)", 'B'),
        rec(Day::Wed, "8:00-8:55", "TMC201", "Dr. Udham Singh", 'C'),
        rec(Day::Wed, "8:55-9:50", "TMC202", "Mr. Amit Juyal", 'C'),
        rec(Day::Wed, "11:05-12:00", "TMC203", "Mr. Neeraj", 'C'),
        rec(Day::Wed, "12:00-12:55", "PMC203", "Sec. C (IoT Lab)", 'C'),
        rec(Day::Wed, "8:00-8:55", "TMC201", "Dr. Udham Singh", 'D'),
        rec(Day::Wed, "8:55-9:50", "TMC202", "Mr. Amit Juyal", 'D'),
        rec(Day::Wed, "11:05-12:00", "TMC203", "Mr. Neeraj", 'D'),
        // THURSDAY
        rec(Day::Thu, "8:00-9:50", "PMC202", "Sec. A (IoT Lab)", 'A'),
        rec(Day::Thu, "8:00-9:50", "PMC203", "Sec. B (Lab 7)", 'B'),
        rec(Day::Thu, "10:10-11:05", "TMC201", "Dr. Udham Singh", 'A'),
        rec(Day::Thu, "10:10-11:05", "TMC201", "Dr. Udham Singh", 'B'),
        rec(Day::Thu, "8:00-8:55", "TMC201", "Dr. Udham Singh", 'C'),
        rec(Day::Thu, "8:55-9:50", "XMC201", "Mr. Aanand", 'C'),
        rec(Day::Thu, "11:05-12:00", "TMC203", "Mr. Neeraj", 'C'),
        rec(Day::Thu, "12:00-12:55", "PMC201", "Sec. D (Lab 7)", 'C'),
        rec(Day::Thu, "12:00-12:55", "PMC202", "Sec. C (IoT Lab)", 'C'),
        rec(Day::Thu, "2:10-3:05", "PDP PRACTICAL", "Ms. Sakshi", 'C'),
        rec(Day::Thu, "8:00-8:55", "TMC201", "Dr. Udham Singh", 'D'),
        rec(Day::Thu, "8:55-9:50", "XMC201", "Mr. Aanand", 'D'),
        rec(Day::Thu, "11:05-12:00", "TMC203", "Mr. Neeraj", 'D'),
        rec(Day::Thu, "12:00-12:55", "PMC201", "Sec. D (Lab 7)", 'D'),
        rec(Day::Thu, "12:00-12:55", "PMC202", "Sec. C (IoT Lab)", 'D'),
        rec(Day::Thu, "2:10-3:05", "PDP PRACTICAL", "Ms. Sakshi", 'D'),
        // FRIDAY
        rec(Day::Fri, "8:00-8:55", "TMC203", "Mr. Neeraj", 'A'),
        rec(Day::Fri, "8:55-9:50", "XMC201", "Mr. Aanand", 'A'),
        rec(Day::Fri, "10:10-11:05", "TMC202", "Mr. Amit Juyal", 'A'),
        rec(Day::Fri, "11:05-12:00", "PDP PRACTICAL", "Ms. Sakshi", 'A'),
        rec(Day::Fri, "8:00-8:55", "TMC203", "Mr. Neeraj", 'B'),
        rec(Day::Fri, "8:55-9:50", "XMC201", "Mr. Aanand", 'B'),
        rec(Day::Fri, "10:10-11:05", "TMC202", "Mr. Amit Juyal", 'B'),
        rec(Day::Fri, "11:05-12:00", "PDP PRACTICAL", "Ms. Sakshi", 'B'),
        rec(Day::Fri, "8:00-8:55", "XMC201", "Mr. Aanand", 'C'),
        rec(Day::Fri, "8:55-9:50", "TMC202", "Mr. Amit Juyal", 'C'),
        rec(Day::Fri, "10:10-11:05", "TMC203", "Mr. Neeraj", 'C'),
        rec(Day::Fri, "12:00-12:55", "XMC201", "Mr. Vishal", 'C'),
        rec(Day::Fri, "8:00-8:55", "XMC201", "Mr. Aanand", 'D'),
        rec(Day::Fri, "8:55-9:50", "TMC202", "Mr. Amit Juyal", 'D'),
        rec(Day::Fri, "10:10-11:05", "TMC203", "Mr. Neeraj", 'D'),
        rec(Day::Fri, "12:00-12:55", "XMC201", "Mr. Vishal", 'D'),
        // SATURDAY, sections A & B only
        rec(Day::Sat, "11:05-12:00", "PBL", "-", 'A'),
        rec(Day::Sat, "12:55-1:50", "PMC203", "Sec. A (Lab 7)", 'A'),
    ]
}
