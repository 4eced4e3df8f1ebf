// Team member records and the static sample roster

use super::DataError;

#[derive(Clone, Debug)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub email: &'static str,
    pub bio: &'static str,
    pub skills: &'static [&'static str],
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
}

impl TeamMember {
    /// Uppercase initials for the avatar placeholder, e.g. "Ana García" -> "AG".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.position.is_empty()
            && !self.email.is_empty()
            && !self.bio.is_empty()
    }
}

pub fn sample_team() -> Result<Vec<TeamMember>, DataError> {
    let team = vec![
        TeamMember {
            id: 1,
            name: "Ana García",
            position: "Frontend Developer",
            email: "ana.garcia@devteam.com",
            bio: "Desarrolladora frontend con 4 años de experiencia en React, Vue.js y Angular. \
                Apasionada por crear interfaces de usuario intuitivas y accesibles.",
            skills: &["JavaScript", "React", "Vue.js", "CSS3", "HTML5", "TypeScript"],
            github: Some("https://github.com/anagarcia"),
            linkedin: Some("https://linkedin.com/in/anagarcia"),
        },
        TeamMember {
            id: 2,
            name: "Carlos Rodríguez",
            position: "Backend Developer",
            email: "carlos.rodriguez@devteam.com",
            bio: "Especialista en desarrollo backend con experiencia en Node.js, Python y bases \
                de datos. Enfocado en arquitecturas escalables y seguras.",
            skills: &["Node.js", "Python", "MongoDB", "PostgreSQL", "Docker", "AWS"],
            github: Some("https://github.com/carlosrod"),
            linkedin: Some("https://linkedin.com/in/carlosrod"),
        },
        TeamMember {
            id: 3,
            name: "María López",
            position: "Full Stack Developer",
            email: "maria.lopez@devteam.com",
            bio: "Desarrolladora full stack con amplia experiencia en tecnologías web modernas. \
                Líder técnica del equipo con enfoque en mejores prácticas.",
            skills: &["JavaScript", "Python", "React", "Django", "PostgreSQL", "Git"],
            github: Some("https://github.com/marialopez"),
            linkedin: Some("https://linkedin.com/in/marialopez"),
        },
        TeamMember {
            id: 4,
            name: "David Martínez",
            position: "DevOps Engineer",
            email: "david.martinez@devteam.com",
            bio: "Ingeniero DevOps especializado en automatización, CI/CD y infraestructura \
                cloud. Experto en contenedores y orquestación.",
            skills: &["Docker", "Kubernetes", "AWS", "Jenkins", "Terraform", "Linux"],
            github: Some("https://github.com/davidmartinez"),
            linkedin: Some("https://linkedin.com/in/davidmartinez"),
        },
    ];

    for member in &team {
        if !member.is_valid() {
            return Err(DataError::InvalidMember(member.id));
        }
    }
    Ok(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_name() {
        let team = sample_team().unwrap();
        assert_eq!(team[0].initials(), "AG");
        assert_eq!(team[3].initials(), "DM");
    }
}
