// Blog post records and the static sample posts

use super::{format_date_es, parse_date, DataError};

const WORDS_PER_MINUTE: usize = 200;
const SENTENCES_PER_PARAGRAPH: usize = 3;

#[derive(Clone, Debug)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    pub author_id: u32,
    pub publish_date: &'static str,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    pub fn formatted_date(&self) -> String {
        match parse_date(self.publish_date) {
            Some(date) => format_date_es(date),
            None => self.publish_date.to_string(),
        }
    }

    /// Estimated reading time at 200 words per minute.
    pub fn reading_time(&self) -> String {
        let words = self.content.split_whitespace().count();
        let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
        format!("{minutes} min de lectura")
    }

    /// Body split into paragraphs of roughly three sentences for long-form display.
    pub fn paragraphs(&self) -> Vec<String> {
        let sentences: Vec<String> = self
            .content
            .split(". ")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.ends_with('.') {
                    s.to_string()
                } else {
                    format!("{s}.")
                }
            })
            .collect();

        sentences
            .chunks(SENTENCES_PER_PARAGRAPH)
            .map(|chunk| chunk.join(" "))
            .collect()
    }

    fn is_valid(&self) -> bool {
        !self.title.is_empty()
            && !self.content.is_empty()
            && self.author_id > 0
            && parse_date(self.publish_date).is_some()
    }
}

pub fn sample_posts() -> Result<Vec<BlogPost>, DataError> {
    let posts = vec![
        BlogPost {
            id: 1,
            title: "Mejores Prácticas en Desarrollo Frontend",
            content: "En el desarrollo frontend moderno, es crucial seguir ciertas prácticas \
                para crear aplicaciones mantenibles y escalables. Una de las principales \
                recomendaciones es la implementación de componentes reutilizables. Esto no solo \
                reduce la duplicación de código, sino que también facilita el mantenimiento a \
                largo plazo. Otra práctica fundamental es la optimización del rendimiento. Esto \
                incluye técnicas como la carga diferida (lazy loading) de componentes, la \
                optimización de imágenes y la minimización de bundle. La accesibilidad también \
                debe ser una prioridad desde el inicio del desarrollo. Implementar elementos \
                semánticos, proporcionar texto alternativo para imágenes y asegurar una \
                navegación por teclado adecuada son aspectos esenciales. Finalmente, la \
                implementación de tests unitarios y de integración garantiza la calidad del \
                código y reduce los errores en producción.",
            author_id: 1,
            publish_date: "2026-02-15",
            tags: &["Frontend", "Buenas Prácticas", "Performance", "Accesibilidad"],
        },
        BlogPost {
            id: 2,
            title: "Arquitectura de Microservicios: Ventajas y Desafíos",
            content: "La arquitectura de microservicios ha revolucionado la forma en que \
                desarrollamos aplicaciones empresariales. Esta aproximación consiste en \
                descomponer una aplicación en servicios pequeños e independientes que se \
                comunican a través de APIs bien definidas. Las principales ventajas incluyen la \
                escalabilidad independiente de cada servicio, la flexibilidad tecnológica que \
                permite usar diferentes lenguajes y frameworks, y la facilidad de despliegue y \
                mantenimiento. Sin embargo, también presenta desafíos significativos. La \
                complejidad de la gestión de múltiples servicios, la necesidad de implementar \
                patrones como circuit breaker y service discovery, y la dificultad de mantener \
                la consistencia de datos son aspectos que deben considerarse cuidadosamente. \
                Para una implementación exitosa, es fundamental contar con un equipo DevOps \
                sólido y herramientas de monitoreo y logging robustas.",
            author_id: 2,
            publish_date: "2026-02-10",
            tags: &["Backend", "Microservicios", "Arquitectura", "DevOps"],
        },
        BlogPost {
            id: 3,
            title: "El Futuro del Desarrollo Web: Tendencias 2026",
            content: "El panorama del desarrollo web continúa evolucionando rápidamente. En \
                2026, vemos emerger varias tendencias importantes que están moldeando el futuro \
                de nuestra industria. La inteligencia artificial se está integrando cada vez más \
                en las herramientas de desarrollo, desde autocompletado inteligente hasta \
                generación de código y detección de errores. Los Progressive Web Apps (PWAs) \
                están ganando tracción como alternativa viable a las aplicaciones nativas, \
                ofreciendo experiencias similares a las apps nativas pero con la flexibilidad de \
                las tecnologías web. WebAssembly está abriendo nuevas posibilidades para \
                ejecutar aplicaciones de alto rendimiento en el navegador, permitiendo portar \
                código de lenguajes como C++ y Rust. La computación edge está cambiando cómo \
                pensamos sobre la entrega de contenido y la latencia. Finalmente, la \
                sostenibilidad en el desarrollo web está cobrando importancia, con un enfoque \
                creciente en crear aplicaciones más eficientes energéticamente.",
            author_id: 3,
            publish_date: "2026-02-05",
            tags: &["Tendencias", "IA", "PWA", "WebAssembly", "Sostenibilidad"],
        },
        BlogPost {
            id: 4,
            title: "DevOps y CI/CD: Automatizando el Ciclo de Vida del Software",
            content: "DevOps representa un cambio cultural y técnico que busca unificar el \
                desarrollo de software y las operaciones de TI. El objetivo principal es acortar \
                el ciclo de vida del desarrollo de sistemas y proporcionar entrega continua con \
                alta calidad de software. La implementación de pipelines de CI/CD (Integración \
                Continua/Despliegue Continuo) es fundamental en esta filosofía. Estos pipelines \
                automatizan el proceso desde el commit del código hasta el despliegue en \
                producción, incluyendo compilación, testing, análisis de calidad y despliegue. \
                Las herramientas como Jenkins, GitLab CI, GitHub Actions y AWS CodePipeline \
                facilitan esta automatización. La containerización con Docker y la orquestación \
                con Kubernetes han revolucionado cómo desplegamos y gestionamos aplicaciones. \
                Además, el Infrastructure as Code (IaC) con herramientas como Terraform permite \
                gestionar la infraestructura de manera declarativa y versionada. El monitoreo y \
                logging continuo son esenciales para mantener la visibilidad y detectar \
                problemas proactivamente.",
            author_id: 4,
            publish_date: "2026-02-01",
            tags: &["DevOps", "CI/CD", "Docker", "Kubernetes", "Automatización"],
        },
    ];

    for post in &posts {
        if !post.is_valid() {
            return Err(DataError::InvalidPost(post.id));
        }
    }
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_time_rounds_up() {
        let posts = sample_posts().unwrap();
        let words = posts[0].content.split_whitespace().count();
        let expected = words.div_ceil(200);
        assert_eq!(posts[0].reading_time(), format!("{expected} min de lectura"));
    }

    #[test]
    fn paragraphs_group_sentences() {
        let posts = sample_posts().unwrap();
        let paragraphs = posts[0].paragraphs();
        assert!(paragraphs.len() > 1);
        for paragraph in &paragraphs {
            assert!(paragraph.ends_with('.'));
        }
    }
}
