//! Built-in source skeletons.
//!
//! Placeholders (see [`super::TemplateContext`]):
//!
//! | Placeholder | Value |
//! |-------------|-------|
//! | `{{NAME}}` | artifact name, verbatim |
//! | `{{NAME_LOWER}}` | artifact name, lower-cased (Java routes) |
//! | `{{NAMESPACE}}` | namespace/package of the artifact's own directory |
//! | `{{ENTITY_NAMESPACE}}` | namespace of the entity directory |
//! | `{{REPOSITORY_NAMESPACE}}` | namespace of the repository directory |
//! | `{{USE_CASE_NAMESPACE}}` | namespace of the use-case directory |
//! | `{{PROJECT_NAME}}`, `{{LANGUAGE}}` | README only |

pub const README: &str = "# {{PROJECT_NAME}} - DDD project ({{LANGUAGE}})\n";

// ── TypeScript ───────────────────────────────────────────────────────────────

pub const TS_ENTITY: &str = r#"export class {{NAME}} {
    id: number;
    constructor(id: number) {
        this.id = id;
    }
}
"#;

pub const TS_REPOSITORY: &str = r#"import { {{NAME}} } from "../Entities/{{NAME}}";

export interface I{{NAME}}Repository {
    findById(id: number): Promise<{{NAME}} | null>;
    save(entity: {{NAME}}): Promise<void>;
}
"#;

pub const TS_USE_CASE: &str = r#"import { I{{NAME}}Repository } from "../../Domain/Repositories/I{{NAME}}Repository";

export class {{NAME}}UseCase {
    constructor(private repository: I{{NAME}}Repository) {}

    async execute(id: number) {
        return await this.repository.findById(id);
    }
}
"#;

pub const TS_CONTROLLER: &str = r#"import { Request, Response } from "express";
import { {{NAME}}UseCase } from "../../Application/UseCases/{{NAME}}UseCase";

export class {{NAME}}Controller {
    constructor(private useCase: {{NAME}}UseCase) {}

    async handle(request: Request, response: Response) {
        const { id } = request.params;
        const result = await this.useCase.execute(Number(id));
        return response.json(result);
    }
}
"#;

// ── C# ───────────────────────────────────────────────────────────────────────

pub const CS_ENTITY: &str = r#"namespace {{NAMESPACE}}
{
    public class {{NAME}}
    {
        public int Id { get; set; }
    }
}
"#;

pub const CS_REPOSITORY: &str = r#"using {{ENTITY_NAMESPACE}};

namespace {{NAMESPACE}}
{
    public interface I{{NAME}}Repository
    {
        {{NAME}}? FindById(int id);
        void Save({{NAME}} entity);
    }
}
"#;

pub const CS_USE_CASE: &str = r#"using {{ENTITY_NAMESPACE}};
using {{REPOSITORY_NAMESPACE}};

namespace {{NAMESPACE}}
{
    public class {{NAME}}UseCase
    {
        private readonly I{{NAME}}Repository _repository;

        public {{NAME}}UseCase(I{{NAME}}Repository repository)
        {
            _repository = repository;
        }

        public {{NAME}}? Execute(int id)
        {
            return _repository.FindById(id);
        }
    }
}
"#;

pub const CS_CONTROLLER: &str = r#"using Microsoft.AspNetCore.Mvc;
using {{USE_CASE_NAMESPACE}};

namespace {{NAMESPACE}}
{
    [ApiController]
    [Route("[controller]")]
    public class {{NAME}}Controller : ControllerBase
    {
        private readonly {{NAME}}UseCase _useCase;

        public {{NAME}}Controller({{NAME}}UseCase useCase)
        {
            _useCase = useCase;
        }

        [HttpGet("{id}")]
        public IActionResult Get(string id)
        {
            var result = _useCase.Execute(int.Parse(id));
            return Ok(result);
        }
    }
}
"#;

// ── Java ─────────────────────────────────────────────────────────────────────

pub const JAVA_ENTITY: &str = r#"package {{NAMESPACE}};

public class {{NAME}} {
    private Long id;

    public {{NAME}}() {
    }

    public {{NAME}}(Long id) {
        this.id = id;
    }

    public Long getId() {
        return id;
    }

    public void setId(Long id) {
        this.id = id;
    }
}
"#;

pub const JAVA_REPOSITORY: &str = r#"package {{NAMESPACE}};

import java.util.Optional;

import {{ENTITY_NAMESPACE}}.{{NAME}};

public interface I{{NAME}}Repository {
    Optional<{{NAME}}> findById(Long id);

    void save({{NAME}} entity);
}
"#;

pub const JAVA_USE_CASE: &str = r#"package {{NAMESPACE}};

import java.util.Optional;

import {{ENTITY_NAMESPACE}}.{{NAME}};
import {{REPOSITORY_NAMESPACE}}.I{{NAME}}Repository;

public class {{NAME}}UseCase {
    private final I{{NAME}}Repository repository;

    public {{NAME}}UseCase(I{{NAME}}Repository repository) {
        this.repository = repository;
    }

    public Optional<{{NAME}}> execute(Long id) {
        return repository.findById(id);
    }
}
"#;

pub const JAVA_CONTROLLER: &str = r#"package {{NAMESPACE}};

import org.springframework.http.ResponseEntity;
import org.springframework.web.bind.annotation.GetMapping;
import org.springframework.web.bind.annotation.PathVariable;
import org.springframework.web.bind.annotation.RequestMapping;
import org.springframework.web.bind.annotation.RestController;

import {{USE_CASE_NAMESPACE}}.{{NAME}}UseCase;

@RestController
@RequestMapping("/{{NAME_LOWER}}")
public class {{NAME}}Controller {
    private final {{NAME}}UseCase useCase;

    public {{NAME}}Controller({{NAME}}UseCase useCase) {
        this.useCase = useCase;
    }

    @GetMapping("/{id}")
    public ResponseEntity<?> handle(@PathVariable String id) {
        return ResponseEntity.ok(useCase.execute(Long.valueOf(id)));
    }
}
"#;
