//! Literal content of the FinOps infrastructure report.
//!
//! Everything the report says that does not come from the embedded Terraform
//! files lives here, in document order.

use super::builder::TableData;
use super::style::Alignment;
use crate::ooxml::docx::writer::DocumentProperties;
use chrono::{NaiveDate, NaiveDateTime};

const C: Alignment = Alignment::Center;
const L: Alignment = Alignment::Left;

/// File name of the generated document, created in the base directory.
pub const OUTPUT_FILE_NAME: &str = "FinOps_인프라_코드_산출물.docx";

// ── metadata ──

pub const REPORT_TITLE: &str = "FinOps 인프라 코드 산출물";
pub const REPORT_SUBTITLE: &str = "Terraform Infrastructure as Code";
pub const PROJECT_NAME: &str = "FinOps Infrastructure";
/// Date printed on the cover, `YYYY-MM-DD`.
pub const REPORT_DATE: &str = "2026-02-23";

/// Midnight of [`REPORT_DATE`]; used for the document metadata and the
/// package timestamps.
pub fn report_timestamp() -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(REPORT_DATE, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
}

pub fn document_properties() -> DocumentProperties {
    let properties = DocumentProperties::new()
        .title(REPORT_TITLE)
        .subject(REPORT_SUBTITLE)
        .creator(PROJECT_NAME)
        .keywords("Terraform, AWS, FinOps")
        .language("ko-KR");
    match report_timestamp() {
        Some(at) => properties.timestamp(at),
        None => properties,
    }
}

// ── embedded sources ──

pub const VPC_SOURCES: [&str; 3] = [
    "modules/vpc/main.tf",
    "modules/vpc/variables.tf",
    "modules/vpc/outputs.tf",
];
pub const SECURITY_GROUP_SOURCES: [&str; 3] = [
    "modules/security-group/main.tf",
    "modules/security-group/variables.tf",
    "modules/security-group/outputs.tf",
];
pub const EC2_SOURCES: [&str; 3] = [
    "modules/ec2/main.tf",
    "modules/ec2/variables.tf",
    "modules/ec2/outputs.tf",
];
pub const ECR_SOURCES: [&str; 3] = [
    "modules/ecr/main.tf",
    "modules/ecr/variables.tf",
    "modules/ecr/output.tf",
];
pub const RDS_SOURCES: [&str; 3] = [
    "modules/rds/main.tf",
    "modules/rds/variables.tf",
    "modules/rds/outputs.tf",
];
pub const DEV_SOURCES: [&str; 3] = [
    "environments/dev/main.tf",
    "environments/dev/variables.tf",
    "environments/dev/output.tf",
];

/// Every embedded file, in the order it appears in the document.
pub const SOURCE_GROUPS: [&[&str]; 6] = [
    &VPC_SOURCES,
    &SECURITY_GROUP_SOURCES,
    &EC2_SOURCES,
    &ECR_SOURCES,
    &RDS_SOURCES,
    &DEV_SOURCES,
];

pub fn source_files() -> impl Iterator<Item = &'static str> {
    SOURCE_GROUPS.into_iter().flatten().copied()
}

// ── cover ──

/// Spacer paragraphs above the title.
pub const COVER_TOP_PADDING: usize = 6;

pub const COVER_INFO: [(&str, &str); 5] = [
    ("프로젝트명", PROJECT_NAME),
    ("클라우드 플랫폼", "AWS (Amazon Web Services)"),
    ("리전", "ap-northeast-2 (서울)"),
    ("IaC 도구", "Terraform >= 1.0.0"),
    ("작성일", REPORT_DATE),
];

// ── table of contents ──

pub const TOC_HEADING: &str = "목차";

pub const TOC_ITEMS: [&str; 15] = [
    "1. 개요",
    "    1.1 프로젝트 개요",
    "    1.2 시스템 아키텍처",
    "    1.3 디렉토리 구조",
    "2. 모듈 상세",
    "    2.1 VPC 모듈",
    "    2.2 Security Group 모듈",
    "    2.3 EC2 모듈",
    "    2.4 ECR 모듈",
    "    2.5 RDS 모듈",
    "3. 환경 구성",
    "    3.1 Dev 환경",
    "4. 변수 명세",
    "5. 출력값 명세",
    "6. 리소스 요약",
];

// ── 1. overview ──

pub const OVERVIEW_HEADING: &str = "1. 개요";
pub const PROJECT_OVERVIEW_HEADING: &str = "1.1 프로젝트 개요";
pub const PROJECT_OVERVIEW: &str = "본 문서는 FinOps(Financial Operations) 인프라스트럭처를 코드로 정의한 \
Terraform 프로젝트의 코드 산출물 문서입니다. \
이 프로젝트는 AWS 클라우드 환경에서 비용 최적화 모니터링 및 알림 시스템을 위한 \
인프라를 자동으로 프로비저닝합니다.";

pub const PROJECT_TABLE: TableData<'static> = TableData {
    name: "project",
    headers: &["항목", "내용"],
    rows: &[
        &["프로젝트명", PROJECT_NAME],
        &["IaC 도구", "Terraform >= 1.0.0"],
        &["클라우드 프로바이더", "AWS (hashicorp/aws ~> 5.0)"],
        &["배포 리전", "ap-northeast-2 (서울)"],
        &["환경", "dev (개발)"],
        &[
            "마이크로서비스 수",
            "5개 (cost-api, cost-collector, alert-service, gateway, dashboard)",
        ],
    ],
    alignments: &[],
};

pub const ARCHITECTURE_HEADING: &str = "1.2 시스템 아키텍처";
pub const ARCHITECTURE: &str = "본 인프라는 모듈화된 Terraform 구성을 통해 VPC, Security Group, EC2, ECR, RDS 등의 \
AWS 리소스를 체계적으로 관리합니다. 퍼블릭 서브넷에 EC2 인스턴스를 배치하고, \
프라이빗 서브넷에 RDS 데이터베이스를 격리하여 보안성을 확보합니다.";
pub const ARCHITECTURE_DIAGRAM_TITLE: &str = "[시스템 아키텍처 다이어그램]";
pub const ARCHITECTURE_DIAGRAM: &str = r#"
+---------------------------------------------------------------+
|                    VPC (10.0.0.0/16)                          |
|                                                               |
|   +----------------------------+                              |
|   |  Public Subnet             |     Internet Gateway         |
|   |  10.0.1.0/24 (AZ-2a)      |<------->  IGW               |
|   |                            |                              |
|   |  +----------------------+  |                              |
|   |  |  EC2 (t3.micro)     |  |     +-------------------+   |
|   |  |  - Docker            |  |     | ECR Registry      |   |
|   |  |  - Docker Compose    |  |---->| - cost-api        |   |
|   |  |  - Git               |  |     | - cost-collector  |   |
|   |  |  - IAM Role (ECR)   |  |     | - alert-service   |   |
|   |  +----------------------+  |     | - gateway         |   |
|   +----------------------------+     | - dashboard       |   |
|              |                       +-------------------+   |
|              | Port 5432 (SG restricted)                     |
|              v                                               |
|   +-------------------------------------------+             |
|   |  Private Subnets                          |             |
|   |  10.0.10.0/24 (AZ-2a)                    |             |
|   |  10.0.20.0/24 (AZ-2c)                    |             |
|   |                                           |             |
|   |  +-------------------------------------+  |             |
|   |  |  RDS PostgreSQL 15 (db.t3.micro)   |  |             |
|   |  |  DB: finops / User: postgres        |  |             |
|   |  |  Storage: 20GB gp2                  |  |             |
|   |  +-------------------------------------+  |             |
|   +-------------------------------------------+             |
+---------------------------------------------------------------+
"#;

pub const DIRECTORY_HEADING: &str = "1.3 디렉토리 구조";
pub const DIRECTORY_TREE: &str = r#"finops-infra/
├── modules/                          # 재사용 가능한 Terraform 모듈
│   ├── vpc/                          # VPC 네트워크 모듈
│   │   ├── main.tf                   # VPC, 서브넷, IGW, 라우트 테이블
│   │   ├── variables.tf              # 입력 변수 정의
│   │   └── outputs.tf                # 출력값 정의
│   ├── security-group/               # 보안 그룹 모듈
│   │   ├── main.tf                   # EC2/RDS 보안 그룹 규칙
│   │   ├── variables.tf              # 입력 변수 정의
│   │   └── outputs.tf                # 출력값 정의
│   ├── ec2/                          # EC2 인스턴스 모듈
│   │   ├── main.tf                   # AMI, IAM, EC2 인스턴스
│   │   ├── variables.tf              # 입력 변수 정의
│   │   └── outputs.tf                # 출력값 정의
│   ├── ecr/                          # ECR 컨테이너 레지스트리 모듈
│   │   ├── main.tf                   # ECR 리포지토리, 수명주기 정책
│   │   ├── variables.tf              # 입력 변수 정의
│   │   └── output.tf                 # 출력값 정의
│   └── rds/                          # RDS 데이터베이스 모듈
│       ├── main.tf                   # DB 서브넷 그룹, RDS 인스턴스
│       ├── variables.tf              # 입력 변수 정의
│       └── outputs.tf                # 출력값 정의
├── environments/                     # 환경별 구성
│   └── dev/                          # 개발 환경
│       ├── main.tf                   # 모듈 오케스트레이션
│       ├── variables.tf              # 환경 변수 정의
│       └── output.tf                 # 환경 출력값
├── .gitignore                        # Git 제외 파일 목록
└── generate_docx.py                  # 본 문서 생성 스크립트"#;

// ── 2. modules ──

pub const MODULES_HEADING: &str = "2. 모듈 상세";

const RESOURCE_HEADERS: &[&str] = &["No", "리소스 타입", "리소스 이름", "설명"];
const RESOURCE_ALIGNMENTS: &[Alignment] = &[C, L, C, L];
const RULE_HEADERS: &[&str] = &["포트", "프로토콜", "소스", "용도"];
const RULE_ALIGNMENTS: &[Alignment] = &[C, C, C, L];

pub const VPC_HEADING: &str = "2.1 VPC 모듈";
pub const VPC_DESCRIPTION: &str = "VPC(Virtual Private Cloud) 모듈은 AWS 네트워크 인프라의 기반을 구성합니다. \
VPC, 인터넷 게이트웨이, 퍼블릭/프라이빗 서브넷, 라우트 테이블을 생성합니다.";
pub const VPC_RESOURCES: TableData<'static> = TableData {
    name: "vpc_resources",
    headers: RESOURCE_HEADERS,
    rows: &[
        &["1", "aws_vpc", "main", "VPC 생성 (CIDR: 10.0.0.0/16)"],
        &["2", "aws_internet_gateway", "main", "인터넷 게이트웨이"],
        &["3", "aws_subnet", "public", "퍼블릭 서브넷 (10.0.1.0/24, AZ-2a)"],
        &["4", "aws_subnet", "private", "프라이빗 서브넷 (10.0.10.0/24, AZ-2a)"],
        &["5", "aws_subnet", "private_2", "프라이빗 서브넷 2 (10.0.20.0/24, AZ-2c)"],
        &["6", "aws_route_table", "public", "퍼블릭 라우트 테이블 (0.0.0.0/0 -> IGW)"],
        &["7", "aws_route_table_association", "public", "퍼블릭 서브넷-라우트 테이블 연결"],
    ],
    alignments: RESOURCE_ALIGNMENTS,
};

pub const SECURITY_GROUP_HEADING: &str = "2.2 Security Group 모듈";
pub const SECURITY_GROUP_DESCRIPTION: &str = "보안 그룹 모듈은 EC2 인스턴스와 RDS 데이터베이스에 대한 네트워크 접근 제어를 정의합니다. \
EC2는 외부 트래픽을 허용하고, RDS는 EC2에서만 접근 가능하도록 제한합니다.";
pub const EC2_RULES_LABEL: &str = "[EC2 보안 그룹 인바운드 규칙]";
pub const EC2_RULES: TableData<'static> = TableData {
    name: "ec2_inbound_rules",
    headers: RULE_HEADERS,
    rows: &[
        &["22", "TCP", "0.0.0.0/0", "SSH 원격 접속"],
        &["80", "TCP", "0.0.0.0/0", "HTTP 웹 트래픽"],
        &["443", "TCP", "0.0.0.0/0", "HTTPS 웹 트래픽"],
        &["3000", "TCP", "0.0.0.0/0", "Dashboard (React 프론트엔드)"],
        &["8282", "TCP", "0.0.0.0/0", "Gateway (API 게이트웨이)"],
    ],
    alignments: RULE_ALIGNMENTS,
};
pub const RDS_RULES_LABEL: &str = "[RDS 보안 그룹 인바운드 규칙]";
pub const RDS_RULES: TableData<'static> = TableData {
    name: "rds_inbound_rules",
    headers: RULE_HEADERS,
    rows: &[&["5432", "TCP", "EC2 보안 그룹", "PostgreSQL 접근"]],
    alignments: RULE_ALIGNMENTS,
};

pub const EC2_HEADING: &str = "2.3 EC2 모듈";
pub const EC2_DESCRIPTION: &str = "EC2 모듈은 애플리케이션 서버 인스턴스를 생성합니다. Amazon Linux 2023 기반으로 \
Docker, Docker Compose, Git이 자동 설치되며, ECR 읽기 권한이 부여된 IAM 역할이 연결됩니다.";
pub const EC2_RESOURCES: TableData<'static> = TableData {
    name: "ec2_resources",
    headers: RESOURCE_HEADERS,
    rows: &[
        &["1", "aws_ami (data)", "amazon_linux", "Amazon Linux 2023 최신 AMI 조회"],
        &["2", "aws_iam_role", "ec2_role", "EC2 IAM 역할 (ECR 접근용)"],
        &["3", "aws_iam_role_policy_attachment", "ecr_read", "ECR ReadOnly 정책 연결"],
        &["4", "aws_iam_instance_profile", "ec2_profile", "IAM 인스턴스 프로파일"],
        &["5", "aws_instance", "app", "EC2 인스턴스 (t3.micro)"],
    ],
    alignments: RESOURCE_ALIGNMENTS,
};
pub const USER_DATA_LABEL: &str = "[EC2 User Data - 초기화 스크립트]";
pub const USER_DATA: TableData<'static> = TableData {
    name: "ec2_user_data",
    headers: &["설치 항목", "설명"],
    rows: &[
        &["Docker", "컨테이너 런타임 설치 및 서비스 활성화"],
        &["Docker Compose", "멀티 컨테이너 오케스트레이션 도구"],
        &["Git", "소스 코드 관리 도구"],
    ],
    alignments: &[],
};

pub const ECR_HEADING: &str = "2.4 ECR 모듈";
pub const ECR_DESCRIPTION: &str = "ECR(Elastic Container Registry) 모듈은 Docker 컨테이너 이미지를 저장하기 위한 \
프라이빗 레지스트리를 생성합니다. 5개의 마이크로서비스 각각에 대한 리포지토리를 생성하고, \
비용 절감을 위한 이미지 수명주기 정책을 적용합니다.";
pub const ECR_REPOSITORIES: TableData<'static> = TableData {
    name: "ecr_repositories",
    headers: &["No", "리포지토리명", "용도"],
    rows: &[
        &["1", "cost-api", "비용 데이터 API 서비스"],
        &["2", "cost-collector", "비용 데이터 수집 서비스"],
        &["3", "alert-service", "알림/알람 서비스"],
        &["4", "gateway", "API 게이트웨이 서비스 (포트 8282)"],
        &["5", "dashboard", "React 프론트엔드 대시보드 (포트 3000)"],
    ],
    alignments: &[C, L, L],
};
pub const LIFECYCLE_LABEL: &str = "[수명주기 정책]";
pub const LIFECYCLE_NOTES: [&str; 2] = [
    "  - 각 리포지토리에 최근 5개 이미지만 유지하는 정책을 적용하여 스토리지 비용을 절감합니다.",
    "  - Push 시 자동 이미지 스캔이 활성화되어 보안 취약점을 점검합니다.",
];

pub const RDS_HEADING: &str = "2.5 RDS 모듈";
pub const RDS_DESCRIPTION: &str = "RDS 모듈은 PostgreSQL 15 데이터베이스 인스턴스를 프라이빗 서브넷에 생성합니다. \
개발 환경에 최적화된 설정으로, 프리티어 호환 인스턴스를 사용합니다.";
pub const RDS_CONFIGURATION: TableData<'static> = TableData {
    name: "rds_configuration",
    headers: &["구성 항목", "설정값"],
    rows: &[
        &["엔진", "PostgreSQL 15"],
        &["인스턴스 클래스", "db.t3.micro (프리티어)"],
        &["스토리지", "20 GB (gp2)"],
        &["데이터베이스명", "finops"],
        &["사용자명", "postgres"],
        &["공개 접근", "비활성화 (프라이빗 서브넷)"],
        &["Multi-AZ", "비활성화 (개발 환경)"],
        &["암호화", "비활성화 (개발 환경)"],
        &["백업 보존 기간", "0일 (개발 환경)"],
        &["최종 스냅샷", "건너뛰기 (skip_final_snapshot)"],
    ],
    alignments: &[],
};

// ── 3. environments ──

pub const ENVIRONMENTS_HEADING: &str = "3. 환경 구성";
pub const DEV_HEADING: &str = "3.1 Dev 환경";
pub const DEV_DESCRIPTION: &str = "개발(dev) 환경은 모든 모듈을 통합하여 전체 인프라를 오케스트레이션합니다. \
Terraform >= 1.0.0 및 AWS Provider ~> 5.0을 요구합니다.";
pub const MODULE_DEPENDENCIES: TableData<'static> = TableData {
    name: "module_dependencies",
    headers: &["모듈", "소스 경로", "의존성"],
    rows: &[
        &["VPC", "../../modules/vpc", "없음"],
        &["Security Group", "../../modules/security-group", "VPC (vpc_id)"],
        &["EC2", "../../modules/ec2", "VPC (subnet_id), SG (ec2_sg_id)"],
        &["RDS", "../../modules/rds", "VPC (subnet_ids), SG (rds_sg_id)"],
        &["ECR", "../../modules/ecr", "없음"],
    ],
    alignments: &[],
};

// ── 4. variables ──

pub const VARIABLES_HEADING: &str = "4. 변수 명세";
pub const VARIABLES_INTRO: &str = "아래 표는 전체 프로젝트에서 사용되는 변수를 모듈별로 정리한 것입니다.";

const VARIABLE_HEADERS: &[&str] = &["변수명", "타입", "기본값", "필수", "설명"];
const VARIABLE_ALIGNMENTS: &[Alignment] = &[L, C, C, C, L];

/// Captioned variable tables, in document order.
pub const VARIABLE_TABLES: [(&str, TableData<'static>); 5] = [
    (
        "[환경 변수 (environments/dev)]",
        TableData {
            name: "dev_variables",
            headers: VARIABLE_HEADERS,
            rows: &[
                &["aws_region", "string", "ap-northeast-2", "X", "AWS 리전"],
                &["project_name", "string", "-", "O", "프로젝트 이름"],
                &["environment", "string", "-", "O", "환경 (dev, prod)"],
                &["vpc_cidr", "string", "10.0.0.0/16", "X", "VPC CIDR 블록"],
                &["key_name", "string", "-", "O", "EC2 SSH 키페어 이름"],
                &["db_password", "string (sensitive)", "-", "O", "RDS 비밀번호"],
            ],
            alignments: VARIABLE_ALIGNMENTS,
        },
    ),
    (
        "[VPC 모듈 변수]",
        TableData {
            name: "vpc_variables",
            headers: VARIABLE_HEADERS,
            rows: &[
                &["project_name", "string", "-", "O", "프로젝트 이름"],
                &["environment", "string", "-", "O", "환경 (dev, prod)"],
                &["vpc_cidr", "string", "10.0.0.0/16", "X", "VPC CIDR 블록"],
                &["public_subnet_cidr", "string", "10.0.1.0/24", "X", "퍼블릭 서브넷 CIDR"],
                &["private_subnet_cidr", "string", "10.0.10.0/24", "X", "프라이빗 서브넷 CIDR"],
                &["availability_zone", "string", "ap-northeast-2a", "X", "가용영역"],
                &["availability_zone_2", "string", "ap-northeast-2c", "X", "두 번째 가용영역"],
                &[
                    "private_subnet_cidr_2",
                    "string",
                    "10.0.20.0/24",
                    "X",
                    "두 번째 프라이빗 서브넷 CIDR",
                ],
            ],
            alignments: VARIABLE_ALIGNMENTS,
        },
    ),
    (
        "[EC2 모듈 변수]",
        TableData {
            name: "ec2_variables",
            headers: VARIABLE_HEADERS,
            rows: &[
                &["project_name", "string", "-", "O", "프로젝트 이름"],
                &["environment", "string", "-", "O", "환경 (dev, prod)"],
                &["subnet_id", "string", "-", "O", "EC2 서브넷 ID"],
                &["security_group_id", "string", "-", "O", "EC2 보안 그룹 ID"],
                &["instance_type", "string", "t3.micro", "X", "EC2 인스턴스 타입"],
                &["key_name", "string", "-", "O", "SSH 키페어 이름"],
            ],
            alignments: VARIABLE_ALIGNMENTS,
        },
    ),
    (
        "[RDS 모듈 변수]",
        TableData {
            name: "rds_variables",
            headers: VARIABLE_HEADERS,
            rows: &[
                &["project_name", "string", "-", "O", "프로젝트 이름"],
                &["environment", "string", "-", "O", "환경 (dev, prod)"],
                &["subnet_ids", "list(string)", "-", "O", "RDS 서브넷 ID 목록"],
                &["security_group_id", "string", "-", "O", "RDS 보안 그룹 ID"],
                &["db_name", "string", "finops", "X", "데이터베이스 이름"],
                &["db_username", "string", "postgres", "X", "데이터베이스 사용자명"],
                &["db_password", "string (sensitive)", "-", "O", "데이터베이스 비밀번호"],
            ],
            alignments: VARIABLE_ALIGNMENTS,
        },
    ),
    (
        "[ECR 모듈 변수]",
        TableData {
            name: "ecr_variables",
            headers: VARIABLE_HEADERS,
            rows: &[
                &["project_name", "string", "-", "O", "프로젝트 이름"],
                &["environment", "string", "-", "O", "환경 (dev, prod)"],
                &[
                    "repository_names",
                    "list(string)",
                    "[5개 서비스]",
                    "X",
                    "ECR 레포지토리 이름 목록",
                ],
            ],
            alignments: VARIABLE_ALIGNMENTS,
        },
    ),
];

// ── 5. outputs ──

pub const OUTPUTS_HEADING: &str = "5. 출력값 명세";
pub const OUTPUTS_INTRO: &str = "각 모듈 및 환경 구성에서 출력되는 값을 정리합니다.";
pub const OUTPUTS: TableData<'static> = TableData {
    name: "outputs",
    headers: &["모듈", "출력명", "설명", "참조 예시"],
    rows: &[
        &["VPC", "vpc_id", "VPC ID", "module.vpc.vpc_id"],
        &["VPC", "public_subnet_id", "퍼블릭 서브넷 ID", "module.vpc.public_subnet_id"],
        &["VPC", "private_subnet_id", "프라이빗 서브넷 ID", "module.vpc.private_subnet_id"],
        &[
            "VPC",
            "private_subnet_id_2",
            "두 번째 프라이빗 서브넷 ID",
            "module.vpc.private_subnet_id_2",
        ],
        &[
            "Security Group",
            "ec2_security_group_id",
            "EC2 보안 그룹 ID",
            "module.security_group.ec2_security_group_id",
        ],
        &[
            "Security Group",
            "rds_security_group_id",
            "RDS 보안 그룹 ID",
            "module.security_group.rds_security_group_id",
        ],
        &["EC2", "instance_id", "EC2 인스턴스 ID", "module.ec2.instance_id"],
        &["EC2", "public_ip", "EC2 퍼블릭 IP", "module.ec2.public_ip"],
        &["EC2", "public_dns", "EC2 퍼블릭 DNS", "module.ec2.public_dns"],
        &["ECR", "repository_urls", "ECR 레포지토리 URL 맵", "module.ecr.repository_urls"],
        &["ECR", "repository_arns", "ECR 레포지토리 ARN 맵", "module.ecr.repository_arns"],
        &["RDS", "endpoint", "RDS 엔드포인트 (host:port)", "module.rds.endpoint"],
        &["RDS", "address", "RDS 주소 (포트 제외)", "module.rds.address"],
        &["RDS", "port", "RDS 포트 (5432)", "module.rds.port"],
    ],
    alignments: &[],
};

// ── 6. resource summary ──

pub const SUMMARY_HEADING: &str = "6. 리소스 요약";
pub const SUMMARY_INTRO: &str = "본 Terraform 프로젝트를 통해 프로비저닝되는 전체 AWS 리소스를 요약합니다.";
pub const RESOURCE_SUMMARY: TableData<'static> = TableData {
    name: "resource_summary",
    headers: &["No", "AWS 서비스", "리소스 타입", "수량"],
    rows: &[
        &["1", "VPC", "aws_vpc", "1"],
        &["2", "Internet Gateway", "aws_internet_gateway", "1"],
        &["3", "Subnet (Public)", "aws_subnet", "1"],
        &["4", "Subnet (Private)", "aws_subnet", "2"],
        &["5", "Route Table", "aws_route_table", "1"],
        &["6", "Route Table Association", "aws_route_table_association", "1"],
        &["7", "Security Group (EC2)", "aws_security_group", "1"],
        &["8", "Security Group (RDS)", "aws_security_group", "1"],
        &["9", "IAM Role", "aws_iam_role", "1"],
        &["10", "IAM Instance Profile", "aws_iam_instance_profile", "1"],
        &["11", "IAM Policy Attachment", "aws_iam_role_policy_attachment", "1"],
        &["12", "EC2 Instance", "aws_instance", "1"],
        &["13", "ECR Repository", "aws_ecr_repository", "5"],
        &["14", "ECR Lifecycle Policy", "aws_ecr_lifecycle_policy", "5"],
        &["15", "RDS Instance", "aws_db_instance", "1"],
    ],
    alignments: &[C, L, L, C],
};
pub const RESOURCE_TOTAL: &str = "총 생성 리소스: 24개";
pub const COST_NOTES_LABEL: &str = "[비용 최적화 참고사항]";
pub const COST_NOTES: [&str; 5] = [
    "EC2 인스턴스: t3.micro (프리티어 적용 가능)",
    "RDS 인스턴스: db.t3.micro (프리티어 적용 가능)",
    "ECR: 이미지 수명주기 정책으로 최근 5개만 보관 (스토리지 비용 절감)",
    "RDS 백업: 보존 기간 0일 (백업 비용 절감, 개발 환경)",
    "Multi-AZ / 암호화: 비활성화 (개발 환경 비용 절감)",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> Vec<TableData<'static>> {
        let mut tables = vec![
            PROJECT_TABLE,
            VPC_RESOURCES,
            EC2_RULES,
            RDS_RULES,
            EC2_RESOURCES,
            USER_DATA,
            ECR_REPOSITORIES,
            RDS_CONFIGURATION,
            MODULE_DEPENDENCIES,
        ];
        tables.extend(VARIABLE_TABLES.iter().map(|(_, table)| *table));
        tables.push(OUTPUTS);
        tables.push(RESOURCE_SUMMARY);
        tables
    }

    #[test]
    fn test_every_table_is_rectangular() {
        for table in all_tables() {
            table.validate().unwrap();
            assert!(table.alignments.len() <= table.column_count(), "{}", table.name);
        }
    }

    #[test]
    fn test_resource_total_matches_summary() {
        let total: u32 = RESOURCE_SUMMARY
            .rows
            .iter()
            .map(|row| row[3].parse::<u32>().unwrap())
            .sum();
        assert_eq!(format!("총 생성 리소스: {}개", total), RESOURCE_TOTAL);
    }

    #[test]
    fn test_source_files() {
        let files: Vec<&str> = source_files().collect();
        assert_eq!(files.len(), 18);
        assert_eq!(files[0], "modules/vpc/main.tf");
        assert_eq!(files[11], "modules/ecr/output.tf");
        assert_eq!(files[17], "environments/dev/output.tf");
    }

    #[test]
    fn test_report_timestamp() {
        let at = report_timestamp().unwrap();
        assert_eq!(at.to_string(), "2026-02-23 00:00:00");
        assert_eq!(document_properties().modified, Some(at));
    }

    #[test]
    fn test_diagrams_are_verbatim_blocks() {
        assert!(ARCHITECTURE_DIAGRAM.trim().starts_with("+---"));
        assert_eq!(ARCHITECTURE_DIAGRAM.trim().lines().count(), 30);
        assert!(DIRECTORY_TREE.starts_with("finops-infra/"));
        assert_eq!(DIRECTORY_TREE.lines().count(), 29);
    }
}
